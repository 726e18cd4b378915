// tests/common/mod.rs
#![allow(dead_code)]

use loja_core::{ContextData, CoreError, PipelineControl};
use once_cell::sync::Lazy;
use tracing::Level;

/// A stand-in for the server's status-update context.
#[derive(Clone, Debug, Default)]
pub struct OrderFlowContext {
  pub order_number: String,
  pub current_status: String,
  pub handled_by: Vec<String>,
  pub stop_at: Option<String>,
  pub notified: bool,
}

impl OrderFlowContext {
  pub fn for_order(order_number: &str, status: &str) -> Self {
    Self {
      order_number: order_number.to_string(),
      current_status: status.to_string(),
      ..Default::default()
    }
  }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FlowError {
  #[error("core error: {0}")]
  Core(String),

  #[error("step failed: {0}")]
  Step(String),
}

impl From<CoreError> for FlowError {
  fn from(err: CoreError) -> Self {
    FlowError::Core(format!("{:?}", err))
  }
}

/// Records `step_name` in `handled_by` and stops when `stop_at` names it.
pub fn recording_handler(step_name: &'static str) -> loja_core::Handler<OrderFlowContext, FlowError> {
  Box::new(move |ctx: ContextData<OrderFlowContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.handled_by.push(step_name.to_string());
      if guard.stop_at.as_deref() == Some(step_name) {
        return Ok(PipelineControl::Stop);
      }
      Ok(PipelineControl::Continue)
    })
  })
}

pub fn failing_handler(step_name: &'static str, message: &'static str) -> loja_core::Handler<OrderFlowContext, FlowError> {
  Box::new(move |ctx: ContextData<OrderFlowContext>| {
    Box::pin(async move {
      ctx.write().handled_by.push(step_name.to_string());
      Err(FlowError::Step(message.to_string()))
    })
  })
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
