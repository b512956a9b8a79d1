// src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{auth_handlers, cart_handlers, order_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // User Routes
      .service(
        web::scope("/users")
          .route("/register", web::post().to(auth_handlers::register_handler))
          .route("/login", web::post().to(auth_handlers::login_handler)),
      )
      // Cart Routes
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::view_cart_handler))
          .route("/items", web::post().to(cart_handlers::add_to_cart_handler))
          .route(
            "/items/{product_id}",
            web::delete().to(cart_handlers::remove_from_cart_handler),
          )
          .route(
            "/shipping-address",
            web::put().to(cart_handlers::save_shipping_address_handler),
          )
          .route(
            "/payment-method",
            web::put().to(cart_handlers::save_payment_method_handler),
          ),
      )
      // Order Routes
      // "/history" is registered before "/{order_id}" so it wins the match.
      .service(
        web::scope("/orders")
          .route("", web::post().to(order_handlers::place_order_handler))
          .route(
            "/history",
            web::get().to(order_handlers::order_history_handler),
          )
          .route("/{order_id}", web::get().to(order_handlers::get_order_handler))
          .route(
            "/{order_id}/pay",
            web::put().to(order_handlers::pay_order_handler),
          )
          .route(
            "/{order_id}/deliver",
            web::put().to(order_handlers::deliver_order_handler),
          ),
      ),
  );
}
