// loja_server/src/web/routes.rs

use crate::web::handlers::{order_handlers, status_handlers};
use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .route(
        "/order-statuses",
        web::get().to(order_handlers::list_order_statuses_handler),
      )
      .service(
        web::scope("/orders")
          .route("/status", web::put().to(status_handlers::update_order_status_handler))
          .route("/{order_number}", web::get().to(order_handlers::get_order_handler)),
      ),
  );
}
