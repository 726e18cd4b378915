// loja_server/src/pipelines/status_update_pipeline.rs

//! The order status-update workflow behind `PUT /api/v1/orders/status`.
//!
//! Steps, in order:
//! 1. `validate_status_update_input`: order number present, status on the
//!    endpoint allow-list.
//! 2. `load_order`: the order must exist; its current status is kept as the
//!    previous status.
//! 3. `apply_status_change`: order update plus history row, atomically.
//! 4. `notify_customer` (optional): failures are logged, never returned.

use crate::errors::AppError;
use crate::pipelines::contexts::StatusUpdateCtxData;
use crate::pipelines::notify_step;
use crate::store::StatusChange;
use loja_core::{ContextData, EndpointStatus, Pipeline, PipelineControl, PipelineRegistry, SkipCondition};
use std::sync::Arc;
use tracing::{event, warn, Level};

pub const STEP_VALIDATE: &str = "validate_status_update_input";
pub const STEP_LOAD_ORDER: &str = "load_order";
pub const STEP_APPLY: &str = "apply_status_change";
pub const STEP_NOTIFY: &str = "notify_customer";

fn non_blank(value: Option<String>) -> Option<String> {
  value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Builds the status-update pipeline.
pub fn build_status_update_pipeline() -> Pipeline<StatusUpdateCtxData, AppError> {
  // Nothing to send when the new status has no template or nobody to send it to.
  let skip_notification: SkipCondition<StatusUpdateCtxData> =
    Arc::new(|ctx_data: ContextData<StatusUpdateCtxData>| {
      let guard = ctx_data.read();
      let has_template = guard.new_status.and_then(EndpointStatus::as_registry_status).is_some();
      let has_recipient = guard
        .applied
        .as_ref()
        .is_some_and(|applied| applied.order.customer_email.is_some());
      !(has_template && has_recipient)
    });

  let mut p = Pipeline::<StatusUpdateCtxData, AppError>::new(&[
    (STEP_VALIDATE, false, None),
    (STEP_LOAD_ORDER, false, None),
    (STEP_APPLY, false, None),
    (STEP_NOTIFY, true, Some(skip_notification)),
  ]);

  p.on_root(STEP_VALIDATE, |ctx_data: ContextData<StatusUpdateCtxData>| {
    Box::pin(async move {
      let (order_number, requested_status) = {
        let guard = ctx_data.read();
        (guard.order_number.clone(), guard.requested_status.clone())
      };

      let order_number = non_blank(order_number).ok_or_else(|| {
        warn!("Status update without order_number.");
        AppError::Validation("order_number is required".to_string())
      })?;
      // Presence is checked on the trimmed value; the allow-list match is
      // exact, so padded values are rejected.
      let requested_status = match requested_status {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
          warn!(%order_number, "Status update without status.");
          return Err(AppError::Validation("status is required".to_string()));
        }
      };
      let new_status = requested_status.parse::<EndpointStatus>().map_err(|core_err| {
        warn!(%order_number, status = %requested_status, "Status outside the accepted set.");
        AppError::Validation(core_err.to_string())
      })?;

      event!(Level::DEBUG, %order_number, %new_status, "Status update input is valid.");
      {
        let mut guard = ctx_data.write();
        guard.order_number = Some(order_number);
        guard.new_status = Some(new_status);
      }
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  p.on_root(STEP_LOAD_ORDER, |ctx_data: ContextData<StatusUpdateCtxData>| {
    Box::pin(async move {
      let (order_number, store) = {
        let guard = ctx_data.read();
        (guard.order_number.clone().unwrap_or_default(), guard.app_state.store.clone())
      };

      let order = store
        .find_by_number(&order_number)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_number)))?;

      event!(Level::INFO, order_id = %order.id, previous_status = %order.status, "Order loaded for status update.");
      {
        let mut guard = ctx_data.write();
        guard.previous_status = Some(order.status.clone());
        guard.order = Some(order);
      }
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  p.on_root(STEP_APPLY, |ctx_data: ContextData<StatusUpdateCtxData>| {
    Box::pin(async move {
      let (change, store, requested_by) = {
        let guard = ctx_data.read();
        let order = guard
          .order
          .as_ref()
          .ok_or_else(|| AppError::Internal("Order missing when applying status change.".to_string()))?;
        let new_status = guard
          .new_status
          .ok_or_else(|| AppError::Internal("Validated status missing when applying status change.".to_string()))?;
        let change = StatusChange {
          order_id: order.id,
          status: new_status.as_str().to_string(),
          tracking_code: non_blank(guard.tracking_number.clone()),
          note: non_blank(guard.notes.clone()),
        };
        (change, guard.app_state.store.clone(), guard.principal.name.clone())
      };

      let applied = store.apply_status_change(change).await?;
      event!(
        Level::INFO,
        order_id = %applied.order.id,
        new_status = %applied.order.status,
        history_id = %applied.history.id,
        %requested_by,
        "Order status updated."
      );
      {
        let mut guard = ctx_data.write();
        guard.order = Some(applied.order.clone());
        guard.applied = Some(applied);
      }
      Ok::<_, AppError>(PipelineControl::Continue)
    })
  });

  p.on_root(STEP_NOTIFY, |ctx_data: ContextData<StatusUpdateCtxData>| {
    Box::pin(notify_step::notify_customer_step(ctx_data))
  });

  p
}

pub fn register_status_update_pipeline(registry: &PipelineRegistry<AppError>) {
  registry.register_pipeline(build_status_update_pipeline());
}
