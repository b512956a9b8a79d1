// src/store/postgres.rs

use crate::errors::AppError;
use crate::models::{Order, User};
use crate::store::{OrderStore, UserStore};
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Orders live in a single `orders` table as JSONB documents, with the
/// owner and creation time denormalised into columns for lookup. See
/// schema.sql.
pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl OrderStore for PgOrderStore {
  async fn insert(&self, order: &Order) -> Result<(), AppError> {
    sqlx::query("INSERT INTO orders (id, user_id, doc, created_at) VALUES ($1, $2, $3, $4)")
      .bind(order.id)
      .bind(order.user_id)
      .bind(Json(order))
      .bind(order.created_at)
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError> {
    let doc: Option<Json<Order>> = sqlx::query_scalar("SELECT doc FROM orders WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(doc.map(|Json(order)| order))
  }

  async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, AppError> {
    let docs: Vec<Json<Order>> =
      sqlx::query_scalar("SELECT doc FROM orders WHERE user_id = $1 ORDER BY created_at DESC")
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
    Ok(docs.into_iter().map(|Json(order)| order).collect())
  }

  async fn update(&self, order: &Order) -> Result<(), AppError> {
    sqlx::query("UPDATE orders SET doc = $2 WHERE id = $1")
      .bind(order.id)
      .bind(Json(order))
      .execute(&self.pool)
      .await?;
    Ok(())
  }
}

pub struct PgUserStore {
  pool: PgPool,
}

impl PgUserStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserStore for PgUserStore {
  async fn insert(&self, user: &User) -> Result<(), AppError> {
    sqlx::query(
      "INSERT INTO users (id, name, email, password_hash, created_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .execute(&self.pool)
    .await?;
    Ok(())
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
      "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(&self.pool)
    .await?;
    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
      "SELECT id, name, email, password_hash, created_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;
    Ok(user)
  }
}
