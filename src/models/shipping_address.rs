// src/models/shipping_address.rs

use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// Destination captured at the shipping step and snapshotted into the
/// order on submission. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
  pub full_name: String,
  pub address: String,
  pub city: String,
  pub state: String,
  pub postal_code: String,
  pub country: String,
}

impl ShippingAddress {
  /// Rejects any blank field. Runs before a submission touches the store.
  pub fn validate(&self) -> Result<(), AppError> {
    let fields = [
      ("fullName", &self.full_name),
      ("address", &self.address),
      ("city", &self.city),
      ("state", &self.state),
      ("postalCode", &self.postal_code),
      ("country", &self.country),
    ];
    for (name, value) in fields {
      if value.trim().is_empty() {
        return Err(AppError::Validation(format!(
          "Shipping address field '{}' is required",
          name
        )));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn address() -> ShippingAddress {
    ShippingAddress {
      full_name: "Jane Doe".to_string(),
      address: "1 Main St".to_string(),
      city: "Springfield".to_string(),
      state: "IL".to_string(),
      postal_code: "62701".to_string(),
      country: "USA".to_string(),
    }
  }

  #[test]
  fn complete_address_passes() {
    assert!(address().validate().is_ok());
  }

  #[test]
  fn blank_field_is_rejected() {
    let mut addr = address();
    addr.postal_code = "   ".to_string();
    let err = addr.validate().unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
  }
}
