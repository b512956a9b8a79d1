// src/web/extractors.rs

use crate::errors::AppError;
use crate::state::AppState;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::warn;
use uuid::Uuid;

/// Identity extracted from the `Authorization: Bearer <token>` header.
/// The token is resolved against the server-side session registry; its
/// contents are never interpreted.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
  pub user_id: Uuid,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let token = req
      .headers()
      .get("Authorization")
      .and_then(|value| value.to_str().ok())
      .and_then(|value| value.strip_prefix("Bearer "));

    let token = match token {
      Some(token) => token,
      None => {
        warn!("AuthenticatedUser extractor: Missing or malformed Authorization header.");
        return ready(Err(AppError::Auth(
          "Authentication required. Missing bearer credential.".to_string(),
        )));
      }
    };

    let state = match req.app_data::<web::Data<AppState>>() {
      Some(state) => state,
      None => {
        return ready(Err(AppError::Internal(
          "Application state is not configured.".to_string(),
        )));
      }
    };

    match state.sessions.resolve(token) {
      Some(user_id) => ready(Ok(AuthenticatedUser { user_id })),
      None => {
        warn!("AuthenticatedUser extractor: Unknown or expired session token.");
        ready(Err(AppError::Auth(
          "Invalid or expired session token.".to_string(),
        )))
      }
    }
  }
}
