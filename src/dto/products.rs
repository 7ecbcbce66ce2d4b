use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub quantity_in_stock: i32,
    /// Units already sold; multiplied by `unit_price` and added to `revenue`.
    #[serde(default)]
    pub quantity_sold: i32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub unit_price: Decimal,
    /// Starting revenue before the initial sale is counted.
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub revenue: Decimal,
}

/// Records an additional sale: `name`, `quantity_in_stock` and `unit_price`
/// replace the stored values, `quantity_sold` is added to the running total.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: String,
    pub quantity_in_stock: i32,
    pub quantity_sold: i32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub unit_price: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
