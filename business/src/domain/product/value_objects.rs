use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Store-assigned product identifier. Zero means "not assigned yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(i32);

impl ProductId {
    pub const UNSET: ProductId = ProductId(0);

    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        ProductId::UNSET
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Smallest price accepted by the catalog forms.
pub const MIN_PRICE: &str = "0.01";

/// Parses a price typed into a form, e.g. `"12.50"`.
pub fn parse_price(text: &str) -> Result<BigDecimal, ProductError> {
    BigDecimal::from_str(text.trim()).map_err(|_| ProductError::PriceInvalid)
}

/// Converts a JSON number into a decimal price without binary noise
/// (`0.1` becomes `0.1`, not `0.1000000000000000055...`).
pub fn price_from_f64(value: f64) -> Result<BigDecimal, ProductError> {
    if !value.is_finite() {
        return Err(ProductError::PriceInvalid);
    }
    parse_price(&value.to_string())
}

pub fn price_to_f64(price: &BigDecimal) -> f64 {
    price.to_f64().unwrap_or_default()
}

/// Prices are kept in cents, matching the `NUMERIC(12, 2)` column.
pub const PRICE_SCALE: i64 = 2;

/// Largest price the store can hold: 9 999 999 999.99.
fn max_price() -> BigDecimal {
    BigDecimal::new(999_999_999_999i64.into(), PRICE_SCALE)
}

/// Rounds a price half up to cents, then checks it is positive and fits the
/// store. `0.004` rounds to zero and is rejected.
pub fn normalize_price(price: BigDecimal) -> Result<BigDecimal, ProductError> {
    let rounded = price.with_scale_round(PRICE_SCALE, RoundingMode::HalfUp);
    if rounded <= BigDecimal::zero() {
        return Err(ProductError::PriceNotPositive);
    }
    if rounded > max_price() {
        return Err(ProductError::PriceInvalid);
    }
    Ok(rounded)
}

/// True when the price is already in the form `normalize_price` produces.
pub fn is_normalized_price(price: &BigDecimal) -> bool {
    normalize_price(price.clone()).is_ok_and(|normalized| &normalized == price)
}

/// Parses a quantity typed into a form. Fractions are rejected rather than
/// truncated.
pub fn parse_quantity(text: &str) -> Result<i32, ProductError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| ProductError::QuantityInvalid)
}
