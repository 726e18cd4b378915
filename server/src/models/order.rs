// loja_server/src/models/order.rs

use chrono::{DateTime, Utc};
use loja_core::OrderStatus;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An order as stored.
///
/// `status` is kept as text: the update endpoint writes values such as
/// `despachado` that are not part of `OrderStatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Order {
  pub id: Uuid,
  pub order_number: String,
  pub status: String,
  pub payment_status: String,
  pub subtotal_cents: i64,
  pub shipping_cents: i64,
  pub total_cents: i64,
  pub customer_id: Option<Uuid>,
  pub customer_email: Option<String>,
  pub reseller_id: Option<Uuid>,
  pub tracking_code: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Order {
  /// The status as a registry value, if it is one.
  pub fn registry_status(&self) -> Option<OrderStatus> {
    self.status.parse().ok()
  }
}

/// Input for creating an order. Checkout owns order creation; this exists
/// for seeding and tests.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
  pub order_number: String,
  pub status: String,
  pub payment_status: String,
  pub subtotal_cents: i64,
  pub shipping_cents: i64,
  pub customer_id: Option<Uuid>,
  pub customer_email: Option<String>,
  pub reseller_id: Option<Uuid>,
}

impl NewOrder {
  pub fn pending(order_number: impl Into<String>, subtotal_cents: i64, shipping_cents: i64) -> Self {
    Self {
      order_number: order_number.into(),
      status: OrderStatus::Pendente.as_str().to_string(),
      payment_status: "pago".to_string(),
      subtotal_cents,
      shipping_cents,
      customer_id: None,
      customer_email: None,
      reseller_id: None,
    }
  }

  pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
    self.customer_email = Some(email.into());
    self
  }

  pub fn total_cents(&self) -> i64 {
    self.subtotal_cents + self.shipping_cents
  }
}
