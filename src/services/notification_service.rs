use std::time::Duration;

use tera::{Context, Tera};
use uuid::Uuid;

use crate::{
    dto::email::EmailContent,
    error::{AppError, AppResult},
    mailer::{NotifyError, OutboundEmail, parse_mailbox},
    response::{ApiResponse, NoData},
    services::{product_service::load_product, supplier_service::load_supplier},
    state::AppState,
};

const SUPPLIER_EMAIL: &str = "supplier_email.html";

/// Branding, body template and delivery bounds for supplier emails.
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    pub company: String,
    pub signature: String,
    pub timeout: Duration,
    templates: Tera,
}

impl NotificationSettings {
    pub fn new(
        company: impl Into<String>,
        signature: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut templates = Tera::default();
        // `.html` names are autoescaped by tera.
        templates.add_raw_template(
            SUPPLIER_EMAIL,
            include_str!("../../templates/supplier_email.html"),
        )?;
        Ok(Self {
            company: company.into(),
            signature: signature.into(),
            timeout,
            templates,
        })
    }

    /// Render the HTML body around `message`.
    pub fn render_html(&self, message: &str) -> AppResult<String> {
        let mut context = Context::new();
        context.insert("company", &self.company);
        context.insert("message", message);
        context.insert("signature", &self.signature);
        self.templates
            .render(SUPPLIER_EMAIL, &context)
            .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("render supplier email")))
    }
}

/// Email the supplier of `product_id`.
///
/// The product, supplier and recipient address are all resolved before the
/// notifier is touched, so neither an unknown product nor an unusable address
/// reaches the relay.
pub async fn notify_supplier(
    state: &AppState,
    product_id: Uuid,
    content: EmailContent,
) -> AppResult<ApiResponse<NoData>> {
    let product = load_product(&state.orm, product_id).await?;
    let supplier = load_supplier(&state.orm, product.supplied_by).await?;

    let to = parse_mailbox(&supplier.email).inspect_err(|err| {
        tracing::warn!(error = %err, supplier_id = %supplier.id, "supplier address rejected");
    })?;

    let settings = &state.notification;
    let email = OutboundEmail {
        to,
        subject: content.subject,
        html_body: settings.render_html(&content.message)?,
    };

    let delivery = tokio::time::timeout(settings.timeout, state.notifier.send(email)).await;
    match delivery {
        Ok(Ok(())) => {
            tracing::info!(
                product_id = %product.id,
                supplier_id = %supplier.id,
                "supplier notified"
            );
            Ok(ApiResponse::ok())
        }
        Ok(Err(err)) => {
            tracing::warn!(error = %err, supplier_id = %supplier.id, "email delivery failed");
            Err(AppError::from(err))
        }
        Err(_) => {
            tracing::warn!(
                supplier_id = %supplier.id,
                timeout_ms = settings.timeout.as_millis() as u64,
                "email delivery timed out"
            );
            Err(NotifyError::Timeout(settings.timeout).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> NotificationSettings {
        NotificationSettings::new("Acme Trading", "Jo", Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn body_contains_message_and_branding() {
        let html = settings().render_html("Please restock 40 units").unwrap();
        assert!(html.starts_with("<h5>Acme Trading</h5>"));
        assert!(html.contains("<p>Please restock 40 units</p>"));
        assert!(html.contains("<h6>Best Regards</h6>"));
        assert!(html.contains("<h6>Jo</h6>"));
    }

    #[test]
    fn message_markup_is_escaped() {
        let html = settings()
            .render_html("<script>alert('x')</script> & more")
            .unwrap();
        assert!(html.contains("<p>&lt;script&gt;alert(&#x27;x&#x27;)&lt;&#x2F;script&gt; &amp; more</p>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn branding_is_escaped_too() {
        let settings =
            NotificationSettings::new("Bolt & Nut <Co>", "Jo", Duration::from_secs(1)).unwrap();
        let html = settings.render_html("hi").unwrap();
        assert!(html.starts_with("<h5>Bolt &amp; Nut &lt;Co&gt;</h5>"));
    }
}
