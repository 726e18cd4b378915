// loja_server/src/web/handlers/status_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::pipelines::contexts::StatusUpdateCtxData;
use crate::services::auth_service::ApiKeyPrincipal;
use crate::state::AppState;
use crate::web::response;
use loja_core::{ContextData, PipelineResult};

/// Every field is optional here so that missing fields surface as
/// validation errors from the workflow rather than as parse errors.
#[derive(Deserialize, Debug, Default)]
pub struct StatusUpdatePayload {
  pub order_number: Option<String>,
  pub status: Option<String>,
  pub tracking_number: Option<String>,
  pub notes: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct StatusUpdateResponse {
  pub order_number: String,
  pub previous_status: String,
  pub new_status: String,
  pub history_id: Uuid,
  pub updated_at: DateTime<Utc>,
  pub notification_sent: bool,
}

/// `PUT /api/v1/orders/status`
///
/// The body is read raw and parsed after authentication, so a bad key is
/// always a 401 even when the body is also malformed.
#[instrument(
  name = "handler::update_order_status",
  skip(app_state, body),
  fields(caller = %principal.name, role = %principal.role)
)]
pub async fn update_order_status_handler(
  principal: ApiKeyPrincipal,
  app_state: web::Data<AppState>,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let payload: StatusUpdatePayload = serde_json::from_slice(&body).map_err(|e| {
    warn!(error = %e, "Status update body is not valid JSON.");
    AppError::Validation(format!("Invalid JSON body: {}", e))
  })?;
  info!(order_number = ?payload.order_number, status = ?payload.status, "Status update requested.");

  let mut ctx = StatusUpdateCtxData::new(app_state.get_ref().clone(), principal);
  ctx.order_number = payload.order_number;
  ctx.requested_status = payload.status;
  ctx.tracking_number = payload.tracking_number;
  ctx.notes = payload.notes;
  let ctx_data = ContextData::new(ctx);

  match app_state.pipelines.run(ctx_data.clone()).await? {
    PipelineResult::Completed => {
      let guard = ctx_data.read();
      let applied = guard.applied.as_ref().ok_or_else(|| {
        AppError::Internal("Status update completed without applying a change.".to_string())
      })?;
      let body = StatusUpdateResponse {
        order_number: applied.order.order_number.clone(),
        previous_status: guard.previous_status.clone().unwrap_or_default(),
        new_status: applied.order.status.clone(),
        history_id: applied.history.id,
        updated_at: applied.order.updated_at,
        notification_sent: guard.notification_sent,
      };
      info!(
        order_number = %body.order_number,
        previous_status = %body.previous_status,
        new_status = %body.new_status,
        "Status update completed."
      );
      Ok(response::success(body))
    }
    PipelineResult::Stopped => {
      warn!("Status update pipeline stopped before completing.");
      Err(AppError::Internal("Status update was halted by an internal step.".to_string()))
    }
  }
}
