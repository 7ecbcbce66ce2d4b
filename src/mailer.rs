//! Outbound email delivery.
//!
//! Services depend on the [`Notifier`] trait; production wires in
//! [`SmtpNotifier`], tests substitute an in-memory double.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;

use crate::config::{MailConfig, MailTls};

/// A fully composed HTML email with an already validated recipient.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: Mailbox,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("`{address}` is not a valid mailbox: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("could not build message: {0}")]
    Build(String),

    #[error("mail relay error: {0}")]
    Transport(String),

    #[error("mail relay did not answer within {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotifyError>;
}

/// SMTP relay client backed by lettre's tokio transport.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    pub fn from_config(config: &MailConfig) -> anyhow::Result<Self> {
        let from = parse_mailbox(&config.from)?;
        let builder = match config.tls {
            MailTls::Wrapper => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.server)?,
            MailTls::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)?
            }
            MailTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.server),
        };
        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(config.timeout))
            .build();

        tracing::info!(
            server = %config.server,
            port = config.port,
            tls = ?config.tls,
            "smtp notifier configured"
        );
        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotifyError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(email.to)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body)
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(())
    }
}

/// Parse `address` as an RFC 5322 mailbox.
pub fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse::<Mailbox>()
        .map_err(|e| NotifyError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}
