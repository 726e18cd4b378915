// src/lib.rs

//! Loja core: the order status domain and the async step pipeline that
//! drives status changes.
//!
//! The crate is split in two halves:
//!  - [`status`]: the closed set of order statuses with their display
//!    configuration, the transition graph, supplier quick actions, the
//!    status-update endpoint allow-list and notification templates.
//!    Everything here is pure, static data.
//!  - [`pipeline`] / [`registry`]: a small workflow engine. A
//!    `Pipeline<TData, Err>` is an ordered list of named steps with
//!    `before`/`on`/`after` hooks operating on a shared `ContextData<TData>`.
//!    A `PipelineRegistry<E>` keys pipelines by their context type so an
//!    HTTP handler can run "the pipeline for this context" without holding
//!    a reference to it.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod status;

// --- Re-exports for the Public API ---

pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::handler::Handler;
pub use crate::core::step::{SkipCondition, StepDef};

pub use crate::pipeline::definition::Pipeline;
pub use crate::registry::PipelineRegistry;

pub use crate::error::{CoreError, CoreResult};

pub use crate::status::{
  all_status_configs, allowed_actions, available_transitions, can_transition, notification_message,
  notification_template, quick_actions, render_notification, status_config, BadgeVariant, EndpointStatus,
  NotificationPlaceholders, OrderStatus, QuickAction, Role, StatusConfig, StatusIcon,
};
