use std::{env, fmt, str::FromStr, time::Duration};

use anyhow::{Context, anyhow};
use axum::http::HeaderValue;

use crate::services::notification_service::NotificationSettings;

const DEFAULT_DATABASE_URL: &str = "sqlite://database.sqlite3?mode=rwc";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<HeaderValue>,
    pub mail: MailConfig,
}

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTls {
    /// Implicit TLS from the first byte (SMTPS, usually port 465).
    Wrapper,
    StartTls,
    None,
}

impl FromStr for MailTls {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrapper" | "ssl" | "tls" => Ok(MailTls::Wrapper),
            "starttls" => Ok(MailTls::StartTls),
            "none" | "plain" => Ok(MailTls::None),
            other => Err(anyhow!("unknown MAIL_TLS mode `{other}`")),
        }
    }
}

#[derive(Clone)]
pub struct MailConfig {
    pub username: String,
    pub password: String,
    pub from: String,
    pub server: String,
    pub port: u16,
    pub tls: MailTls,
    pub timeout: Duration,
    pub company: String,
    pub signature: String,
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .field("server", &self.server)
            .field("port", &self.port)
            .field("tls", &self.tls)
            .field("timeout", &self.timeout)
            .field("company", &self.company)
            .field("signature", &self.signature)
            .finish()
    }
}

impl MailConfig {
    pub fn notification_settings(&self) -> anyhow::Result<NotificationSettings> {
        NotificationSettings::new(self.company.clone(), self.signature.clone(), self.timeout)
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("invalid CORS origin `{origin}`"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        let username = lookup("MAIL_USERNAME").context("MAIL_USERNAME is not set")?;
        let password = lookup("MAIL_PASSWORD").context("MAIL_PASSWORD is not set")?;
        let from = lookup("MAIL_FROM").unwrap_or_else(|| username.clone());
        let server = lookup("MAIL_SERVER").unwrap_or_else(|| "smtp.gmail.com".to_string());
        let port_mail = lookup("MAIL_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(465);
        let tls = match lookup("MAIL_TLS") {
            Some(mode) => mode.parse::<MailTls>()?,
            None => MailTls::Wrapper,
        };
        let timeout = lookup("MAIL_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));
        let company = lookup("MAIL_COMPANY").unwrap_or_else(|| "Inventory".to_string());
        let signature = lookup("MAIL_SIGNATURE").unwrap_or_else(|| company.clone());

        Ok(Self {
            database_url,
            host,
            port,
            cors_origins,
            mail: MailConfig {
                username,
                password,
                from,
                server,
                port: port_mail,
                tls,
                timeout,
                company,
                signature,
            },
        })
    }
}
