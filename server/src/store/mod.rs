// loja_server/src/store/mod.rs

//! Persistence for orders and their status history.

pub mod memory;
pub mod postgres;

use crate::errors::Result;
use crate::models::{NewOrder, Order, OrderStatusHistory};
use async_trait::async_trait;
use uuid::Uuid;

pub use memory::MemoryOrderStore;
pub use postgres::PgOrderStore;

/// A status change to persist.
#[derive(Debug, Clone)]
pub struct StatusChange {
  pub order_id: Uuid,
  pub status: String,
  /// Replaces the stored tracking code when present.
  pub tracking_code: Option<String>,
  pub note: Option<String>,
}

/// What `apply_status_change` wrote.
#[derive(Debug, Clone)]
pub struct AppliedStatusChange {
  pub order: Order,
  pub history: OrderStatusHistory,
}

#[async_trait]
pub trait OrderStore: Send + Sync {
  async fn find_by_number(&self, order_number: &str) -> Result<Option<Order>>;

  /// Updates the order row and appends one history row as a single unit:
  /// either both writes land or neither does.
  async fn apply_status_change(&self, change: StatusChange) -> Result<AppliedStatusChange>;

  /// History rows of an order, newest first.
  async fn history_for(&self, order_id: Uuid) -> Result<Vec<OrderStatusHistory>>;

  async fn insert_order(&self, order: NewOrder) -> Result<Order>;
}
