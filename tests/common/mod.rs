// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use storefront::models::{CartItem, PaymentMethod, ShippingAddress};
use storefront::pricing::PriceBreakdown;
use storefront::services::order_service::OrderDraft;
use tracing::Level;
use uuid::Uuid;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixture builders ---

pub fn item(name: &str, price: f64, quantity: u32) -> CartItem {
  CartItem {
    product: Uuid::new_v4(),
    name: name.to_string(),
    quantity,
    price,
    image: format!("/images/{}.jpg", name),
    slug: name.to_string(),
  }
}

pub fn address() -> ShippingAddress {
  ShippingAddress {
    full_name: "Jane Doe".to_string(),
    address: "1 Main St".to_string(),
    city: "Springfield".to_string(),
    state: "IL".to_string(),
    postal_code: "62701".to_string(),
    country: "USA".to_string(),
  }
}

/// A draft whose price figures agree with the server computation, the way
/// a well-behaved client would submit it.
pub fn draft(items: Vec<CartItem>, method: Option<PaymentMethod>) -> OrderDraft {
  let prices = PriceBreakdown::compute(&items);
  OrderDraft {
    order_items: items,
    shipping_address: address(),
    payment_method: method,
    items_price: prices.items_price,
    shipping_price: prices.shipping_price,
    tax_price: prices.tax_price,
    total_price: prices.total_price,
  }
}
