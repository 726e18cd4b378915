// loja_server/src/store/memory.rs

//! In-process `OrderStore`, used by tests and by `STORE=memory`.

use super::{AppliedStatusChange, OrderStore, StatusChange};
use crate::errors::{AppError, Result};
use crate::models::{NewOrder, Order, OrderStatusHistory};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

#[derive(Default)]
struct Tables {
  orders: HashMap<Uuid, Order>,
  history: Vec<OrderStatusHistory>,
}

/// Both tables sit behind one mutex, which makes a status change atomic.
#[derive(Default)]
pub struct MemoryOrderStore {
  tables: Mutex<Tables>,
  fail_writes: AtomicBool,
}

impl MemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Makes every subsequent write fail as a database error would.
  pub fn set_fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }

  pub fn history_len(&self) -> usize {
    self.tables.lock().history.len()
  }

  fn check_writable(&self) -> Result<()> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(AppError::Sqlx(sqlx::Error::PoolTimedOut));
    }
    Ok(())
  }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
  async fn find_by_number(&self, order_number: &str) -> Result<Option<Order>> {
    let tables = self.tables.lock();
    Ok(tables.orders.values().find(|o| o.order_number == order_number).cloned())
  }

  async fn apply_status_change(&self, change: StatusChange) -> Result<AppliedStatusChange> {
    self.check_writable()?;
    let mut tables = self.tables.lock();
    let now = Utc::now();

    let order = tables
      .orders
      .get_mut(&change.order_id)
      .ok_or_else(|| AppError::NotFound(format!("Order {} not found", change.order_id)))?;
    order.status = change.status.clone();
    if let Some(code) = change.tracking_code {
      order.tracking_code = Some(code);
    }
    order.updated_at = now;
    let order = order.clone();

    let history = OrderStatusHistory {
      id: Uuid::new_v4(),
      order_id: change.order_id,
      status: change.status,
      note: change.note,
      created_at: now,
    };
    tables.history.push(history.clone());

    Ok(AppliedStatusChange { order, history })
  }

  async fn history_for(&self, order_id: Uuid) -> Result<Vec<OrderStatusHistory>> {
    let tables = self.tables.lock();
    Ok(tables.history.iter().rev().filter(|h| h.order_id == order_id).cloned().collect())
  }

  async fn insert_order(&self, new_order: NewOrder) -> Result<Order> {
    self.check_writable()?;
    let mut tables = self.tables.lock();
    if tables.orders.values().any(|o| o.order_number == new_order.order_number) {
      return Err(AppError::Validation(format!(
        "Order number {} already exists",
        new_order.order_number
      )));
    }

    let now = Utc::now();
    let order = Order {
      id: Uuid::new_v4(),
      total_cents: new_order.total_cents(),
      order_number: new_order.order_number,
      status: new_order.status,
      payment_status: new_order.payment_status,
      subtotal_cents: new_order.subtotal_cents,
      shipping_cents: new_order.shipping_cents,
      customer_id: new_order.customer_id,
      customer_email: new_order.customer_email,
      reseller_id: new_order.reseller_id,
      tracking_code: None,
      created_at: now,
      updated_at: now,
    };
    tables.orders.insert(order.id, order.clone());
    Ok(order)
  }
}
