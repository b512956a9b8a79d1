// src/lib.rs

//! Storefront checkout core: per-user cart state, a pure pricing
//! calculator, order submission and lookup behind a thin actix-web API.
//!
//! The crate is organised around a few seams:
//!  - `cart` holds the explicit application-state container for carts,
//!    mutated only through `CartAction` transition messages.
//!  - `pricing` is the single pricing calculator shared by the cart
//!    summary preview and order construction.
//!  - `store` is the persistence collaborator boundary (trait objects
//!    with Postgres-document and in-process implementations).
//!  - `services` carries the order and auth operations themselves.
//!  - `web` is the HTTP surface.

pub mod cart;
pub mod config;
pub mod errors;
pub mod models;
pub mod pricing;
pub mod services;
pub mod state;
pub mod store;
pub mod web;

// Re-exports for the types callers touch most often.
pub use crate::errors::{AppError, Result};
pub use crate::pricing::PriceBreakdown;
pub use crate::state::AppState;
