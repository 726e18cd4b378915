// loja_server/src/pipelines/notify_step.rs

use crate::errors::{AppError, Result as AppResult};
use crate::pipelines::contexts::StatusUpdateCtxData;
use chrono::{DateTime, FixedOffset, Utc};
use loja_core::{ContextData, NotificationPlaceholders, PipelineControl};
use tracing::{info, instrument, warn};

/// `{data}` value: the calendar date of `at` in the customer's offset.
pub fn customer_date(at: DateTime<Utc>, offset: FixedOffset) -> String {
  at.with_timezone(&offset).format("%d/%m/%Y").to_string()
}

/// Renders the customer message for the new status and hands it to the
/// notifier. Runs as an optional step: an `Err` here is logged by the
/// pipeline and the update still succeeds.
#[instrument(name = "step::notify_customer", skip(ctx_data), err(Display))]
pub async fn notify_customer_step(ctx_data: ContextData<StatusUpdateCtxData>) -> AppResult<PipelineControl> {
  let (registry_status, order, notifier, offset) = {
    let guard = ctx_data.read();
    let order = guard
      .applied
      .as_ref()
      .map(|applied| applied.order.clone())
      .ok_or_else(|| AppError::Internal("No applied status change to notify about.".to_string()))?;
    (
      guard.new_status.and_then(|s| s.as_registry_status()),
      order,
      guard.app_state.notifier.clone(),
      guard.app_state.config.notification_utc_offset,
    )
  };

  let (Some(status), Some(recipient)) = (registry_status, order.customer_email.as_deref()) else {
    return Ok(PipelineControl::Continue);
  };

  let mut placeholders = NotificationPlaceholders::new()
    .numero(order.order_number.clone())
    .data(customer_date(order.updated_at, offset));
  if let Some(code) = &order.tracking_code {
    placeholders = placeholders.codigo(code.clone());
  }

  let subject = format!("Pedido #{} - {}", order.order_number, status.label());
  let body = placeholders.render(status);

  match notifier.send(recipient, &subject, &body).await {
    Ok(sent) => {
      info!(message_id = %sent.message_id, order_number = %order.order_number, "Customer notified of status change.");
      ctx_data.write().notification_sent = true;
      Ok(PipelineControl::Continue)
    }
    Err(e) => {
      warn!(order_number = %order.order_number, error = %e, "Customer notification failed.");
      Err(e)
    }
  }
}
