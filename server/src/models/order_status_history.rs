// loja_server/src/models/order_status_history.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only log row written for every accepted status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct OrderStatusHistory {
  pub id: Uuid,
  pub order_id: Uuid,
  pub status: String,
  pub note: Option<String>,
  pub created_at: DateTime<Utc>,
}
