// src/main.rs

use storefront::config::AppConfig;
use storefront::cart::CartRegistry;
use storefront::services::auth_service::SessionRegistry;
use storefront::state::AppState;
use storefront::store::{
  MemoryOrderStore, MemoryUserStore, OrderStore, PgOrderStore, PgUserStore, UserStore,
};

use actix_web::{web, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting storefront API server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Pick the persistence collaborator: Postgres when configured, the
  // in-process stores otherwise.
  let (users, orders): (Arc<dyn UserStore>, Arc<dyn OrderStore>) = match &app_config.database_url {
    Some(url) => {
      let db_pool = match PgPool::connect(url).await {
        Ok(pool) => {
          tracing::info!("Successfully connected to the database.");
          pool
        }
        Err(e) => {
          tracing::error!(error = %e, "Failed to connect to the database.");
          panic!("Database connection error: {}", e);
        }
      };
      (
        Arc::new(PgUserStore::new(db_pool.clone())) as Arc<dyn UserStore>,
        Arc::new(PgOrderStore::new(db_pool)) as Arc<dyn OrderStore>,
      )
    }
    None => {
      tracing::warn!("DATABASE_URL is not set; using in-process stores.");
      (
        Arc::new(MemoryUserStore::new()) as Arc<dyn UserStore>,
        Arc::new(MemoryOrderStore::new()) as Arc<dyn OrderStore>,
      )
    }
  };

  // Create AppState
  let app_state = AppState {
    users,
    orders,
    sessions: Arc::new(SessionRegistry::new()),
    carts: Arc::new(CartRegistry::new()),
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(storefront::web::routes::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
