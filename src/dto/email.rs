use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EmailContent {
    pub message: String,
    pub subject: String,
}
