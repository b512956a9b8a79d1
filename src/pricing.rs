// src/pricing.rs

//! The pricing calculator: one pure function used identically by the cart
//! summary preview and by order submission, so the two always agree.

use crate::models::CartItem;
use serde::{Deserialize, Serialize};

/// Order totals above this value ship for free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 200.0;
/// Flat fee charged whenever the item total does not clear the threshold.
pub const FLAT_SHIPPING_FEE: f64 = 15.0;
/// Tax rate applied to the item total.
pub const TAX_RATE: f64 = 0.15;

/// Rounds a currency amount to whole cents, half up, with a small epsilon
/// to counter binary floating-point representation error.
pub fn round2(value: f64) -> f64 {
  (value * 100.0 + f64::EPSILON).round() / 100.0
}

/// A currency amount expressed in whole cents, for exact comparisons.
pub fn to_cents(value: f64) -> i64 {
  (value * 100.0 + f64::EPSILON).round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
  pub items_price: f64,
  pub shipping_price: f64,
  pub tax_price: f64,
  pub total_price: f64,
}

impl PriceBreakdown {
  /// Computes the breakdown for a sequence of items. Deterministic and
  /// side-effect free. An empty sequence is not rejected; it prices out
  /// to the flat shipping fee alone.
  pub fn compute(items: &[CartItem]) -> Self {
    let items_price = round2(
      items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum(),
    );
    let shipping_price = if items_price > FREE_SHIPPING_THRESHOLD {
      0.0
    } else {
      FLAT_SHIPPING_FEE
    };
    let tax_price = round2(items_price * TAX_RATE);
    let total_price = round2(items_price + shipping_price + tax_price);

    Self {
      items_price,
      shipping_price,
      tax_price,
      total_price,
    }
  }

  /// Cent-exact comparison. Float equality is useless here; two breakdowns
  /// agree when every component lands on the same cent.
  pub fn agrees_with(&self, other: &PriceBreakdown) -> bool {
    to_cents(self.items_price) == to_cents(other.items_price)
      && to_cents(self.shipping_price) == to_cents(other.shipping_price)
      && to_cents(self.tax_price) == to_cents(other.tax_price)
      && to_cents(self.total_price) == to_cents(other.total_price)
  }
}
