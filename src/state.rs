use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{mailer::Notifier, services::notification_service::NotificationSettings};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub notifier: Arc<dyn Notifier>,
    pub notification: Arc<NotificationSettings>,
}
