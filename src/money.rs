//! Money amounts are stored as integer minor units (cents) so every backend
//! keeps them exact; the API speaks `Decimal` with at most two places.

use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::error::{AppError, AppResult};

const SCALE: u32 = 2;

/// Convert an API amount into minor units.
///
/// Amounts with more than two significant decimal places are rejected rather
/// than rounded, so a stored price always explains the stored revenue.
pub fn to_minor_units(amount: Decimal, field: &str) -> AppResult<i64> {
    if amount.normalize().scale() > SCALE {
        return Err(AppError::Validation(format!(
            "{field} must have at most {SCALE} decimal places"
        )));
    }
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_i64())
        .ok_or_else(|| AppError::Validation(format!("{field} is out of range")))
}

pub fn from_minor_units(cents: i64) -> Decimal {
    Decimal::new(cents, SCALE)
}
