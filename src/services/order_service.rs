// src/services/order_service.rs

//! Order submission, lookup, and the paid/delivered state transitions.

use crate::cart::{CartAction, CartRegistry};
use crate::errors::AppError;
use crate::models::{CartItem, Order, PaymentMethod, ShippingAddress};
use crate::pricing::PriceBreakdown;
use crate::store::OrderStore;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// The order creation request as the client sends it: item snapshots, the
/// checkout selections, and the client's own price figures. The prices are
/// untrusted input; submission recomputes them from the items.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
  pub order_items: Vec<CartItem>,
  pub shipping_address: ShippingAddress,
  pub payment_method: Option<PaymentMethod>,
  pub items_price: f64,
  pub shipping_price: f64,
  pub tax_price: f64,
  pub total_price: f64,
}

impl OrderDraft {
  fn submitted_prices(&self) -> PriceBreakdown {
    PriceBreakdown {
      items_price: self.items_price,
      shipping_price: self.shipping_price,
      tax_price: self.tax_price,
      total_price: self.total_price,
    }
  }
}

/// Validates the draft, recomputes the price breakdown from the submitted
/// items, persists the order, and clears the caller's cart items. The cart
/// is only touched after the store accepts the order, so a failed
/// submission leaves it intact for retry. Shipping address and payment
/// method selections survive a successful checkout.
///
/// An empty item sequence is not rejected here; the navigation guards
/// upstream own that rule, and an empty draft prices out to the flat
/// shipping fee.
#[instrument(name = "order_service::submit_order", skip(orders, carts, draft), fields(user_id = %user_id))]
pub async fn submit_order(
  orders: &dyn OrderStore,
  carts: &CartRegistry,
  user_id: Uuid,
  draft: OrderDraft,
) -> Result<Order, AppError> {
  draft.shipping_address.validate()?;
  let payment_method = draft
    .payment_method
    .ok_or_else(|| AppError::Validation("Payment method is required".to_string()))?;

  for item in &draft.order_items {
    if item.quantity < 1 {
      return Err(AppError::Validation(format!(
        "Quantity for '{}' must be at least 1",
        item.name
      )));
    }
    if item.price < 0.0 {
      return Err(AppError::Validation(format!(
        "Unit price for '{}' cannot be negative",
        item.name
      )));
    }
  }

  let prices = PriceBreakdown::compute(&draft.order_items);
  if !prices.agrees_with(&draft.submitted_prices()) {
    warn!(
      computed_total = prices.total_price,
      submitted_total = draft.total_price,
      "Rejecting order whose submitted prices disagree with the server computation"
    );
    return Err(AppError::Validation(
      "Submitted prices do not match the computed totals".to_string(),
    ));
  }

  let order = Order {
    id: Uuid::new_v4(),
    user_id,
    order_items: draft.order_items,
    shipping_address: draft.shipping_address,
    payment_method,
    prices,
    is_paid: false,
    paid_at: None,
    is_delivered: false,
    delivered_at: None,
    created_at: Utc::now(),
  };
  orders.insert(&order).await?;

  carts.apply(user_id, CartAction::ClearItems);
  info!(order_id = %order.id, total = order.prices.total_price, "Order placed.");
  Ok(order)
}

/// Fetches one order, scoped to its owner. An order that exists but
/// belongs to someone else is indistinguishable from one that doesn't
/// exist.
pub async fn get_order(
  orders: &dyn OrderStore,
  user_id: Uuid,
  order_id: Uuid,
) -> Result<Order, AppError> {
  match orders.find_by_id(order_id).await? {
    Some(order) if order.user_id == user_id => Ok(order),
    _ => Err(AppError::NotFound(format!("Order {} not found", order_id))),
  }
}

/// All orders owned by the user, newest first. An empty history is an
/// empty vector, not an error.
pub async fn list_orders(orders: &dyn OrderStore, user_id: Uuid) -> Result<Vec<Order>, AppError> {
  orders.list_by_user(user_id).await
}

/// State transition invoked by the payment collaborator once payment
/// settles.
#[instrument(name = "order_service::mark_paid", skip(orders), fields(user_id = %user_id, order_id = %order_id))]
pub async fn mark_paid(
  orders: &dyn OrderStore,
  user_id: Uuid,
  order_id: Uuid,
  paid_at: DateTime<Utc>,
) -> Result<Order, AppError> {
  let mut order = get_order(orders, user_id, order_id).await?;
  if order.is_paid {
    return Err(AppError::Validation(format!(
      "Order {} is already paid",
      order_id
    )));
  }
  order.is_paid = true;
  order.paid_at = Some(paid_at);
  orders.update(&order).await?;
  info!("Order marked paid.");
  Ok(order)
}

/// State transition invoked by the fulfilment collaborator. Delivery
/// requires payment to have settled first.
#[instrument(name = "order_service::mark_delivered", skip(orders), fields(user_id = %user_id, order_id = %order_id))]
pub async fn mark_delivered(
  orders: &dyn OrderStore,
  user_id: Uuid,
  order_id: Uuid,
  delivered_at: DateTime<Utc>,
) -> Result<Order, AppError> {
  let mut order = get_order(orders, user_id, order_id).await?;
  if !order.is_paid {
    return Err(AppError::Validation(format!(
      "Order {} cannot be delivered before it is paid",
      order_id
    )));
  }
  if order.is_delivered {
    return Err(AppError::Validation(format!(
      "Order {} is already delivered",
      order_id
    )));
  }
  order.is_delivered = true;
  order.delivered_at = Some(delivered_at);
  orders.update(&order).await?;
  info!("Order marked delivered.");
  Ok(order)
}
