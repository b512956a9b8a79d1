// src/models/order.rs

use crate::models::{CartItem, PaymentMethod, ShippingAddress};
use crate::pricing::PriceBreakdown;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A placed order. Items, address, method, and prices are immutable once
/// the order is created; only the paid/delivered pairs change afterwards,
/// driven by the payment and fulfilment collaborators. Orders are never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: Uuid,
  pub user_id: Uuid,
  pub order_items: Vec<CartItem>,
  pub shipping_address: ShippingAddress,
  pub payment_method: PaymentMethod,
  #[serde(flatten)]
  pub prices: PriceBreakdown,
  pub is_paid: bool,
  pub paid_at: Option<DateTime<Utc>>,
  pub is_delivered: bool,
  pub delivered_at: Option<DateTime<Utc>>,
  pub created_at: DateTime<Utc>,
}
