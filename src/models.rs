use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    entity::{products, suppliers},
    money::from_minor_units,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub quantity_in_stock: i32,
    pub quantity_sold: i32,
    /// Exact JSON number with at most two decimal places.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub revenue: Decimal,
    /// Id of the supplier this product belongs to.
    pub supplied_by: Uuid,
}

impl From<suppliers::Model> for Supplier {
    fn from(model: suppliers::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            company: model.company,
            phone: model.phone,
            email: model.email,
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity_in_stock: model.quantity_in_stock,
            quantity_sold: model.quantity_sold,
            unit_price: from_minor_units(model.unit_price),
            revenue: from_minor_units(model.revenue),
            supplied_by: model.supplied_by,
        }
    }
}
