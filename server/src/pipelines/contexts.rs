// loja_server/src/pipelines/contexts.rs

//! Data carried through the workflow pipelines, wrapped in `ContextData`.

use crate::models::Order;
use crate::services::auth_service::ApiKeyPrincipal;
use crate::state::AppState;
use crate::store::AppliedStatusChange;
use loja_core::EndpointStatus;

#[derive(Clone)]
pub struct StatusUpdateCtxData {
  pub app_state: AppState,
  pub principal: ApiKeyPrincipal,

  // Request input, unvalidated.
  pub order_number: Option<String>,
  pub requested_status: Option<String>,
  pub tracking_number: Option<String>,
  pub notes: Option<String>,

  // Filled in by the steps.
  pub new_status: Option<EndpointStatus>,
  pub order: Option<Order>,
  pub previous_status: Option<String>,
  pub applied: Option<AppliedStatusChange>,
  pub notification_sent: bool,
}

impl StatusUpdateCtxData {
  pub fn new(app_state: AppState, principal: ApiKeyPrincipal) -> Self {
    Self {
      app_state,
      principal,
      order_number: None,
      requested_status: None,
      tracking_number: None,
      notes: None,
      new_status: None,
      order: None,
      previous_status: None,
      applied: None,
      notification_sent: false,
    }
  }
}
