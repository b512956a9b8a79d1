// src/state.rs

use crate::cart::CartRegistry;
use crate::config::AppConfig;
use crate::services::auth_service::SessionRegistry;
use crate::store::{OrderStore, UserStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub users: Arc<dyn UserStore>,
  pub orders: Arc<dyn OrderStore>,
  pub sessions: Arc<SessionRegistry>,
  pub carts: Arc<CartRegistry>,
  pub config: Arc<AppConfig>,
}
