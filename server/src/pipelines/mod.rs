// loja_server/src/pipelines/mod.rs

//! Workflow pipelines run through the application's `PipelineRegistry`.

use crate::errors::AppError;
use loja_core::PipelineRegistry;

pub mod contexts;
pub mod notify_step;
pub mod status_update_pipeline;

/// Registers every pipeline the application runs. Called once per `AppState`.
pub fn register_all_pipelines(registry: &PipelineRegistry<AppError>) {
  status_update_pipeline::register_status_update_pipeline(registry);
  tracing::info!(pipelines = registry.len(), "Application pipelines registered.");
}
