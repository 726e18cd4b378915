// loja_server/src/state.rs

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::pipelines;
use crate::services::notifier::Notifier;
use crate::store::OrderStore;
use loja_core::PipelineRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn OrderStore>,
  pub pipelines: Arc<PipelineRegistry<AppError>>,
  pub notifier: Arc<Notifier>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  /// Builds the state and registers every workflow pipeline.
  pub fn new(store: Arc<dyn OrderStore>, config: Arc<AppConfig>) -> Self {
    let registry = Arc::new(PipelineRegistry::<AppError>::new());
    pipelines::register_all_pipelines(&registry);

    Self {
      store,
      pipelines: registry,
      notifier: Arc::new(Notifier::new(config.notification_sender.clone())),
      config,
    }
  }
}
