// src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::cart::CartAction;
use crate::errors::AppError;
use crate::models::{CartItem, PaymentMethod, ShippingAddress};
use crate::pricing::PriceBreakdown;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct AddToCartRequestPayload {
  pub product: Uuid,
  pub name: String,
  pub quantity: u32,
  pub price: f64,
  pub image: String,
  pub slug: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SavePaymentMethodPayload {
  pub payment_method: PaymentMethod,
}

// --- Handler Implementations ---

/// Returns the cart together with its computed price breakdown; this is
/// the pre-submission preview of the same calculator order submission
/// runs.
#[instrument(
  name = "handler::view_cart",
  skip(app_state, auth_user),
  fields(user_id = %auth_user.user_id)
)]
pub async fn view_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let cart = app_state.carts.snapshot(auth_user.user_id);
  let summary = PriceBreakdown::compute(&cart.items);
  Ok(HttpResponse::Ok().json(json!({ "cart": cart, "summary": summary })))
}

#[instrument(
  name = "handler::add_to_cart",
  skip(app_state, req_payload, auth_user),
  fields(user_id = %auth_user.user_id, product = %req_payload.product, quantity = %req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  if payload.quantity < 1 {
    return Err(AppError::Validation(
      "Quantity must be at least 1".to_string(),
    ));
  }
  if payload.price < 0.0 {
    return Err(AppError::Validation(
      "Unit price cannot be negative".to_string(),
    ));
  }

  let item = CartItem {
    product: payload.product,
    name: payload.name,
    quantity: payload.quantity,
    price: payload.price,
    image: payload.image,
    slug: payload.slug,
  };
  let cart = app_state
    .carts
    .apply(auth_user.user_id, CartAction::AddItem(item));

  info!("Item added to cart; cart now holds {} lines.", cart.items.len());
  Ok(HttpResponse::Ok().json(json!({ "message": "Item added to cart.", "cart": cart })))
}

#[instrument(
  name = "handler::remove_from_cart",
  skip(app_state, auth_user),
  fields(user_id = %auth_user.user_id, product = %path)
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let product = path.into_inner();
  let cart = app_state
    .carts
    .apply(auth_user.user_id, CartAction::RemoveItem(product));
  Ok(HttpResponse::Ok().json(json!({ "message": "Item removed from cart.", "cart": cart })))
}

#[instrument(
  name = "handler::save_shipping_address",
  skip(app_state, req_payload, auth_user),
  fields(user_id = %auth_user.user_id)
)]
pub async fn save_shipping_address_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ShippingAddress>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let address = req_payload.into_inner();
  address.validate()?;
  let cart = app_state
    .carts
    .apply(auth_user.user_id, CartAction::SaveShippingAddress(address));
  Ok(HttpResponse::Ok().json(json!({ "message": "Shipping address saved.", "cart": cart })))
}

#[instrument(
  name = "handler::save_payment_method",
  skip(app_state, req_payload, auth_user),
  fields(user_id = %auth_user.user_id, method = %req_payload.payment_method)
)]
pub async fn save_payment_method_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<SavePaymentMethodPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let method = req_payload.payment_method;
  let cart = app_state
    .carts
    .apply(auth_user.user_id, CartAction::SavePaymentMethod(method));
  Ok(HttpResponse::Ok().json(json!({ "message": "Payment method saved.", "cart": cart })))
}
