// loja_server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{Order, OrderStatusHistory};
use crate::services::auth_service::ApiKeyPrincipal;
use crate::state::AppState;
use crate::web::response;
use loja_core::{
  all_status_configs, allowed_actions, available_transitions, quick_actions, status_config, OrderStatus, QuickAction,
  StatusConfig,
};

#[derive(Serialize, Debug)]
pub struct StatusListingEntry {
  #[serde(flatten)]
  pub config: StatusConfig,
  pub quick_actions: &'static [QuickAction],
}

/// How an order's current status is displayed and what can happen next.
#[derive(Serialize, Debug)]
pub struct StatusView {
  pub value: String,
  /// False when the stored value is outside the registry (e.g. `despachado`).
  pub known: bool,
  pub config: StatusConfig,
  pub available_transitions: Vec<OrderStatus>,
  pub allowed_actions: Vec<OrderStatus>,
  pub quick_actions: &'static [QuickAction],
}

impl StatusView {
  pub fn for_order(order: &Order, principal: &ApiKeyPrincipal) -> Self {
    let registry_status = order.registry_status();
    Self {
      value: order.status.clone(),
      known: registry_status.is_some(),
      config: status_config(&order.status),
      available_transitions: available_transitions(&order.status),
      allowed_actions: registry_status
        .map(|status| allowed_actions(status, principal.role))
        .unwrap_or_default(),
      quick_actions: registry_status.map(quick_actions).unwrap_or(&[]),
    }
  }
}

#[derive(Serialize, Debug)]
pub struct OrderView {
  pub order: Order,
  pub status: StatusView,
  pub history: Vec<OrderStatusHistory>,
}

/// `GET /api/v1/order-statuses`
#[instrument(name = "handler::list_order_statuses")]
pub async fn list_order_statuses_handler() -> HttpResponse {
  let entries: Vec<StatusListingEntry> = all_status_configs()
    .into_iter()
    .map(|config| StatusListingEntry {
      quick_actions: quick_actions(config.status),
      config,
    })
    .collect();
  response::success(entries)
}

/// `GET /api/v1/orders/{order_number}`
#[instrument(name = "handler::get_order", skip(app_state, path), fields(caller = %principal.name, order_number = %path.as_ref()))]
pub async fn get_order_handler(
  principal: ApiKeyPrincipal,
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let order_number = path.into_inner();

  let order = app_state
    .store
    .find_by_number(&order_number)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_number)))?;
  let history = app_state.store.history_for(order.id).await?;

  info!(order_id = %order.id, history_rows = history.len(), "Order fetched.");
  Ok(response::success(OrderView {
    status: StatusView::for_order(&order, &principal),
    order,
    history,
  }))
}
