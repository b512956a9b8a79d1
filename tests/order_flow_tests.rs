// tests/order_flow_tests.rs
mod common; // Reference the common module

use common::*;
use chrono::{Duration, Utc};
use storefront::cart::{CartAction, CartRegistry};
use storefront::errors::AppError;
use storefront::models::{Order, PaymentMethod};
use storefront::pricing::PriceBreakdown;
use storefront::services::order_service;
use storefront::store::{MemoryOrderStore, OrderStore};
use uuid::Uuid;

#[tokio::test]
async fn submit_order_persists_and_clears_cart_items() {
  setup_tracing();
  let orders = MemoryOrderStore::new();
  let carts = CartRegistry::new();
  let user_id = Uuid::new_v4();

  let kettle = item("kettle", 100.0, 1);
  carts.apply(user_id, CartAction::AddItem(kettle.clone()));
  carts.apply(user_id, CartAction::SaveShippingAddress(address()));
  carts.apply(user_id, CartAction::SavePaymentMethod(PaymentMethod::PayPal));

  let placed = order_service::submit_order(
    &orders,
    &carts,
    user_id,
    draft(vec![kettle], Some(PaymentMethod::PayPal)),
  )
  .await
  .unwrap();

  assert_eq!(placed.user_id, user_id);
  assert!(!placed.is_paid);
  assert!(!placed.is_delivered);
  assert_eq!(placed.prices.items_price, 100.0);
  assert_eq!(placed.prices.total_price, 130.0);

  // Cart items are gone, but the checkout selections survive.
  let cart = carts.snapshot(user_id);
  assert!(cart.items.is_empty());
  assert!(cart.shipping_address.is_some());
  assert_eq!(cart.payment_method, Some(PaymentMethod::PayPal));

  // The persisted order is retrievable under its assigned identifier.
  let fetched = order_service::get_order(&orders, user_id, placed.id)
    .await
    .unwrap();
  assert_eq!(fetched.id, placed.id);
  assert_eq!(fetched.order_items, placed.order_items);
}

#[tokio::test]
async fn blank_shipping_field_is_rejected_before_persistence() {
  setup_tracing();
  let orders = MemoryOrderStore::new();
  let carts = CartRegistry::new();
  let user_id = Uuid::new_v4();

  let mut bad_draft = draft(vec![item("mug", 12.5, 2)], Some(PaymentMethod::Stripe));
  bad_draft.shipping_address.city = String::new();

  let err = order_service::submit_order(&orders, &carts, user_id, bad_draft)
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  let history = order_service::list_orders(&orders, user_id).await.unwrap();
  assert!(history.is_empty());
}

#[tokio::test]
async fn missing_payment_method_is_rejected_before_persistence() {
  setup_tracing();
  let orders = MemoryOrderStore::new();
  let carts = CartRegistry::new();
  let user_id = Uuid::new_v4();

  let err = order_service::submit_order(
    &orders,
    &carts,
    user_id,
    draft(vec![item("mug", 12.5, 2)], None),
  )
  .await
  .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  let history = order_service::list_orders(&orders, user_id).await.unwrap();
  assert!(history.is_empty());
}

#[tokio::test]
async fn tampered_total_is_rejected() {
  setup_tracing();
  let orders = MemoryOrderStore::new();
  let carts = CartRegistry::new();
  let user_id = Uuid::new_v4();

  let mut tampered = draft(vec![item("mug", 12.5, 2)], Some(PaymentMethod::Cash));
  tampered.total_price -= 10.0;

  let err = order_service::submit_order(&orders, &carts, user_id, tampered)
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  let history = order_service::list_orders(&orders, user_id).await.unwrap();
  assert!(history.is_empty());
}

#[tokio::test]
async fn failed_submission_leaves_cart_untouched() {
  setup_tracing();
  let orders = MemoryOrderStore::new();
  let carts = CartRegistry::new();
  let user_id = Uuid::new_v4();

  carts.apply(user_id, CartAction::AddItem(item("mug", 12.5, 2)));

  let err = order_service::submit_order(
    &orders,
    &carts,
    user_id,
    draft(vec![item("mug", 12.5, 2)], None),
  )
  .await
  .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  // Still there for retry.
  assert_eq!(carts.snapshot(user_id).items.len(), 1);
}

#[tokio::test]
async fn lookup_of_unknown_order_is_not_found() {
  setup_tracing();
  let orders = MemoryOrderStore::new();
  let err = order_service::get_order(&orders, Uuid::new_v4(), Uuid::new_v4())
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn lookup_of_foreign_order_is_not_found() {
  setup_tracing();
  let orders = MemoryOrderStore::new();
  let carts = CartRegistry::new();
  let owner = Uuid::new_v4();
  let stranger = Uuid::new_v4();

  let placed = order_service::submit_order(
    &orders,
    &carts,
    owner,
    draft(vec![item("kettle", 100.0, 1)], Some(PaymentMethod::PayPal)),
  )
  .await
  .unwrap();

  let err = order_service::get_order(&orders, stranger, placed.id)
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn history_lists_only_own_orders_newest_first() {
  setup_tracing();
  let orders = MemoryOrderStore::new();
  let user_id = Uuid::new_v4();
  let other_user = Uuid::new_v4();

  let make_order = |owner: Uuid, age_minutes: i64| {
    let items = vec![item("mug", 12.5, 2)];
    Order {
      id: Uuid::new_v4(),
      user_id: owner,
      prices: PriceBreakdown::compute(&items),
      order_items: items,
      shipping_address: address(),
      payment_method: PaymentMethod::Cash,
      is_paid: false,
      paid_at: None,
      is_delivered: false,
      delivered_at: None,
      created_at: Utc::now() - Duration::minutes(age_minutes),
    }
  };

  let older = make_order(user_id, 10);
  let newer = make_order(user_id, 1);
  let foreign = make_order(other_user, 5);
  orders.insert(&older).await.unwrap();
  orders.insert(&newer).await.unwrap();
  orders.insert(&foreign).await.unwrap();

  let history = order_service::list_orders(&orders, user_id).await.unwrap();
  assert_eq!(history.len(), 2);
  assert_eq!(history[0].id, newer.id);
  assert_eq!(history[1].id, older.id);
}

#[tokio::test]
async fn paid_and_delivered_transitions() {
  setup_tracing();
  let orders = MemoryOrderStore::new();
  let carts = CartRegistry::new();
  let user_id = Uuid::new_v4();

  let placed = order_service::submit_order(
    &orders,
    &carts,
    user_id,
    draft(vec![item("kettle", 100.0, 1)], Some(PaymentMethod::Stripe)),
  )
  .await
  .unwrap();

  // Delivery before payment is rejected.
  let err = order_service::mark_delivered(&orders, user_id, placed.id, Utc::now())
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  let paid = order_service::mark_paid(&orders, user_id, placed.id, Utc::now())
    .await
    .unwrap();
  assert!(paid.is_paid);
  assert!(paid.paid_at.is_some());

  // Paying twice is rejected.
  let err = order_service::mark_paid(&orders, user_id, placed.id, Utc::now())
    .await
    .unwrap_err();
  assert!(matches!(err, AppError::Validation(_)));

  let delivered = order_service::mark_delivered(&orders, user_id, placed.id, Utc::now())
    .await
    .unwrap();
  assert!(delivered.is_delivered);
  assert!(delivered.delivered_at.is_some());

  // The stored document reflects both transitions.
  let fetched = order_service::get_order(&orders, user_id, placed.id)
    .await
    .unwrap();
  assert!(fetched.is_paid && fetched.is_delivered);
}

#[tokio::test]
async fn empty_draft_prices_to_flat_shipping_and_is_accepted() {
  setup_tracing();
  let orders = MemoryOrderStore::new();
  let carts = CartRegistry::new();
  let user_id = Uuid::new_v4();

  let placed = order_service::submit_order(
    &orders,
    &carts,
    user_id,
    draft(Vec::new(), Some(PaymentMethod::Cash)),
  )
  .await
  .unwrap();
  assert_eq!(placed.prices.items_price, 0.0);
  assert_eq!(placed.prices.total_price, 15.0);
}
