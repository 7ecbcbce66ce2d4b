#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use inventory_api::{
    db::run_migrations,
    dto::{products::CreateProductRequest, suppliers::SupplierRequest},
    mailer::{Notifier, NotifyError, OutboundEmail},
    models::{Product, Supplier},
    services::{
        notification_service::NotificationSettings, product_service, supplier_service,
    },
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use uuid::Uuid;

/// Captures every email instead of sending it.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Relay that rejects every message.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _email: OutboundEmail) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("535 authentication rejected".into()))
    }
}

/// Relay that never answers within any sane timeout.
pub struct StalledNotifier;

#[async_trait]
impl Notifier for StalledNotifier {
    async fn send(&self, _email: OutboundEmail) -> Result<(), NotifyError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(())
    }
}

/// Private in-memory SQLite database. A single pooled connection keeps every
/// query on the same database, which disappears when the pool is dropped.
pub async fn memory_db() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    Ok(Database::connect(options).await?)
}

/// Fresh database with the schema migrated.
pub async fn setup_state(notifier: Arc<dyn Notifier>) -> anyhow::Result<AppState> {
    setup_state_with_timeout(notifier, Duration::from_secs(5)).await
}

pub async fn setup_state_with_timeout(
    notifier: Arc<dyn Notifier>,
    timeout: Duration,
) -> anyhow::Result<AppState> {
    let orm = memory_db().await?;
    run_migrations(&orm).await?;

    Ok(AppState {
        orm,
        notifier,
        notification: Arc::new(NotificationSettings::new("Acme Trading", "Jo", timeout)?),
    })
}

pub fn supplier_request(name: &str, email: &str) -> SupplierRequest {
    SupplierRequest {
        name: name.to_string(),
        company: format!("{name} Ltd"),
        phone: "+1-555-0100".to_string(),
        email: email.to_string(),
    }
}

pub async fn create_supplier(state: &AppState, name: &str, email: &str) -> anyhow::Result<Supplier> {
    let resp = supplier_service::create_supplier(&state.orm, supplier_request(name, email)).await?;
    Ok(resp.data.expect("created supplier"))
}

pub async fn create_product(
    state: &AppState,
    supplier_id: Uuid,
    name: &str,
    quantity_sold: i32,
    unit_price: i64,
) -> anyhow::Result<Product> {
    let resp = product_service::create_product(
        &state.orm,
        supplier_id,
        CreateProductRequest {
            name: name.to_string(),
            quantity_in_stock: 100,
            quantity_sold,
            unit_price: Decimal::from(unit_price),
            revenue: Decimal::ZERO,
        },
    )
    .await?;
    Ok(resp.data.expect("created product"))
}
