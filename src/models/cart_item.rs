// src/models/cart_item.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One cart line. The product reference doubles as the line identifier:
/// adding the same product again replaces the line rather than appending.
/// Order submission snapshots these verbatim into the order document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
  pub product: Uuid,
  pub name: String,
  pub quantity: u32,
  pub price: f64,
  pub image: String,
  pub slug: String,
}
