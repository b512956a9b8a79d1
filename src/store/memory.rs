// src/store/memory.rs

use crate::errors::AppError;
use crate::models::{Order, User};
use crate::store::{OrderStore, UserStore};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// In-process order storage. Used when no DATABASE_URL is configured and
/// by the integration tests; mirrors the Postgres store's contract,
/// including newest-first user listings.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
  orders: RwLock<HashMap<Uuid, Order>>,
}

impl MemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
  async fn insert(&self, order: &Order) -> Result<(), AppError> {
    self.orders.write().insert(order.id, order.clone());
    Ok(())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError> {
    Ok(self.orders.read().get(&id).cloned())
  }

  async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, AppError> {
    let mut owned: Vec<Order> = self
      .orders
      .read()
      .values()
      .filter(|order| order.user_id == user_id)
      .cloned()
      .collect();
    owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(owned)
  }

  async fn update(&self, order: &Order) -> Result<(), AppError> {
    self.orders.write().insert(order.id, order.clone());
    Ok(())
  }
}

#[derive(Debug, Default)]
pub struct MemoryUserStore {
  users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl UserStore for MemoryUserStore {
  async fn insert(&self, user: &User) -> Result<(), AppError> {
    self.users.write().insert(user.id, user.clone());
    Ok(())
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
    Ok(
      self
        .users
        .read()
        .values()
        .find(|user| user.email == email)
        .cloned(),
    )
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
    Ok(self.users.read().get(&id).cloned())
  }
}
