// loja_core/src/status/mod.rs

//! The order status domain.
//!
//! Two status sets live side by side and are deliberately kept apart:
//! [`OrderStatus`] is the ten-state lifecycle used by the storefront, the
//! supplier portal and the back office, while [`EndpointStatus`] is the
//! six-value allow-list accepted by the external status-update endpoint.

pub mod actions;
pub mod endpoint;
pub mod notification;
pub mod order_status;

pub use actions::{allowed_actions, quick_actions, QuickAction, Role};
pub use endpoint::EndpointStatus;
pub use notification::{notification_message, notification_template, render_notification, NotificationPlaceholders};
pub use order_status::{
  all_status_configs, available_transitions, can_transition, status_config, BadgeVariant, OrderStatus, StatusConfig,
  StatusIcon,
};
