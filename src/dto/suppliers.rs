use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Supplier;

/// Body for both creating and replacing a supplier; every field is required.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SupplierRequest {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SupplierList {
    #[schema(value_type = Vec<Supplier>)]
    pub items: Vec<Supplier>,
}
