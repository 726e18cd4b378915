// loja_core/src/core/control.rs

//! Flow signals returned by handlers and the outcome of a whole run.

/// Returned by each handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineControl {
  /// Keep going: next handler of this step, then the next step.
  Continue,
  /// Halt the run now. Nothing after this handler executes.
  Stop,
}

/// Outcome of `Pipeline::run` when no handler failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineResult {
  Completed,
  Stopped,
}
