// src/models/payment_method.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of payment methods offered at the payment step. Wire
/// strings match the checkout form values exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
  PayPal,
  Stripe,
  Cash,
}

impl fmt::Display for PaymentMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      PaymentMethod::PayPal => "PayPal",
      PaymentMethod::Stripe => "Stripe",
      PaymentMethod::Cash => "Cash",
    };
    f.write_str(name)
  }
}
