// src/store/mod.rs

//! The persistence collaborator boundary. The services only ever see these
//! traits; behind them sit a Postgres document store (orders as JSONB,
//! users as rows) and an in-process store used when no database is
//! configured and by the integration tests.
//!
//! Any mutual exclusion needed to keep concurrent writes sane lives behind
//! this boundary (atomic document insert/update), not in the services.

use crate::errors::AppError;
use crate::models::{Order, User};
use async_trait::async_trait;
use uuid::Uuid;

mod memory;
mod postgres;

pub use memory::{MemoryOrderStore, MemoryUserStore};
pub use postgres::{PgOrderStore, PgUserStore};

#[async_trait]
pub trait OrderStore: Send + Sync {
  async fn insert(&self, order: &Order) -> Result<(), AppError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError>;
  /// All orders owned by the user, newest first.
  async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, AppError>;
  /// Replaces the stored document for an existing order.
  async fn update(&self, order: &Order) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
  async fn insert(&self, user: &User) -> Result<(), AppError>;
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;
}
