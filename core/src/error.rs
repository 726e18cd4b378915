// loja_core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
  #[error("Unknown order status: '{0}'")]
  UnknownStatus(String),

  /// The value is not one of the six statuses the update endpoint accepts.
  /// Registry-only statuses such as `embalado` also land here.
  #[error("Invalid status '{0}'. Accepted values: pendente, em_preparacao, despachado, finalizado, cancelado, reembolsado")]
  InvalidStatus(String),

  #[error("Unknown role: '{0}'")]
  UnknownRole(String),

  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Step already exists: {step_name}")]
  DuplicateStep { step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("No pipeline registered for context type {type_name}")]
  PipelineNotRegistered { type_name: String },

  #[error("Type mismatch during context downcast (expected {expected_type})")]
  TypeMismatch { expected_type: String },

  #[error("Error in pipeline handler. Source: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },
}

impl From<AnyhowError> for CoreError {
  fn from(err: AnyhowError) -> Self {
    // Unwrap a CoreError that was boxed into anyhow on its way up.
    match err.downcast::<CoreError>() {
      Ok(core_err) => core_err,
      Err(source) => CoreError::HandlerError { source },
    }
  }
}

pub type CoreResult<T, E = CoreError> = std::result::Result<T, E>;
