// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::order_service::{self, OrderDraft};
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(
  name = "handler::place_order",
  skip(app_state, req_payload, auth_user),
  fields(user_id = %auth_user.user_id)
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<OrderDraft>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  info!("Order placement attempt by user: {}", auth_user.user_id);
  let order = order_service::submit_order(
    app_state.orders.as_ref(),
    &app_state.carts,
    auth_user.user_id,
    req_payload.into_inner(),
  )
  .await?;

  Ok(HttpResponse::Created().json(order))
}

#[instrument(
  name = "handler::order_history",
  skip(app_state, auth_user),
  fields(user_id = %auth_user.user_id)
)]
pub async fn order_history_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders = order_service::list_orders(app_state.orders.as_ref(), auth_user.user_id).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(
  name = "handler::get_order",
  skip(app_state, auth_user),
  fields(user_id = %auth_user.user_id, order_id = %path)
)]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let order =
    order_service::get_order(app_state.orders.as_ref(), auth_user.user_id, path.into_inner())
      .await?;
  Ok(HttpResponse::Ok().json(order))
}

/// Invoked by the payment collaborator when payment settles; sets the
/// paid flag and timestamp.
#[instrument(
  name = "handler::pay_order",
  skip(app_state, auth_user),
  fields(user_id = %auth_user.user_id, order_id = %path)
)]
pub async fn pay_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let order = order_service::mark_paid(
    app_state.orders.as_ref(),
    auth_user.user_id,
    path.into_inner(),
    Utc::now(),
  )
  .await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Order paid.", "order": order })))
}

/// Invoked by the fulfilment collaborator once the shipment arrives.
#[instrument(
  name = "handler::deliver_order",
  skip(app_state, auth_user),
  fields(user_id = %auth_user.user_id, order_id = %path)
)]
pub async fn deliver_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let order = order_service::mark_delivered(
    app_state.orders.as_ref(),
    auth_user.user_id,
    path.into_inner(),
    Utc::now(),
  )
  .await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Order delivered.", "order": order })))
}
