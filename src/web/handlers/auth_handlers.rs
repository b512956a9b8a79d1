// src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct RegisterRequestPayload {
  pub name: String,
  pub email: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequestPayload {
  pub email: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(
  name = "handler::register",
  skip(app_state, req_payload),
  fields(req_email = %req_payload.email)
)]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RegisterRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Registration attempt for email: {}", req_payload.email);
  let payload = req_payload.into_inner();
  let (user, token) = auth_service::register(
    app_state.users.as_ref(),
    &app_state.sessions,
    &payload.name,
    &payload.email,
    &payload.password,
  )
  .await?;

  Ok(HttpResponse::Created().json(json!({
    "id": user.id,
    "name": user.name,
    "email": user.email,
    "token": token,
  })))
}

#[instrument(
  name = "handler::login",
  skip(app_state, req_payload),
  fields(req_email = %req_payload.email)
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<LoginRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Login attempt for email: {}", req_payload.email);
  let payload = req_payload.into_inner();
  let (user, token) = auth_service::login(
    app_state.users.as_ref(),
    &app_state.sessions,
    &payload.email,
    &payload.password,
  )
  .await?;

  Ok(HttpResponse::Ok().json(json!({
    "id": user.id,
    "name": user.name,
    "email": user.email,
    "token": token,
  })))
}
