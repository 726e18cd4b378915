// loja_server/src/store/postgres.rs

use super::{AppliedStatusChange, OrderStore, StatusChange};
use crate::errors::{AppError, Result};
use crate::models::{NewOrder, Order, OrderStatusHistory};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{event, instrument, Level};
use uuid::Uuid;

const ORDER_COLUMNS: &str = "id, order_number, status, payment_status, subtotal_cents, shipping_cents, \
   total_cents, customer_id, customer_email, reseller_id, tracking_code, created_at, updated_at";

#[derive(Clone)]
pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Applies the SQL files under `server/migrations`.
  #[instrument(name = "pg_store::run_migrations", skip(self), err(Display))]
  pub async fn run_migrations(&self) -> Result<()> {
    sqlx::migrate!("./migrations").run(&self.pool).await?;
    event!(Level::INFO, "Database migrations applied.");
    Ok(())
  }
}

#[async_trait]
impl OrderStore for PgOrderStore {
  #[instrument(name = "pg_store::find_by_number", skip(self), err(Display))]
  async fn find_by_number(&self, order_number: &str) -> Result<Option<Order>> {
    let query = format!("SELECT {} FROM orders WHERE order_number = $1", ORDER_COLUMNS);
    let order = sqlx::query_as::<_, Order>(&query)
      .bind(order_number)
      .fetch_optional(&self.pool)
      .await?;
    Ok(order)
  }

  #[instrument(
    name = "pg_store::apply_status_change",
    skip(self, change),
    fields(order_id = %change.order_id, status = %change.status),
    err(Display)
  )]
  async fn apply_status_change(&self, change: StatusChange) -> Result<AppliedStatusChange> {
    let mut tx = self.pool.begin().await?;

    let update = format!(
      "UPDATE orders SET status = $2, tracking_code = COALESCE($3, tracking_code), updated_at = NOW() \
       WHERE id = $1 RETURNING {}",
      ORDER_COLUMNS
    );
    let order = sqlx::query_as::<_, Order>(&update)
      .bind(change.order_id)
      .bind(&change.status)
      .bind(change.tracking_code.as_deref())
      .fetch_optional(&mut *tx)
      .await?
      .ok_or_else(|| AppError::NotFound(format!("Order {} not found", change.order_id)))?;

    let history = sqlx::query_as::<_, OrderStatusHistory>(
      "INSERT INTO order_status_history (id, order_id, status, note, created_at) \
       VALUES ($1, $2, $3, $4, $5) RETURNING id, order_id, status, note, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(order.id)
    .bind(&change.status)
    .bind(change.note.as_deref())
    .bind(order.updated_at)
    .fetch_one(&mut *tx)
    .await?;

    // Dropping `tx` on an early return above rolls both writes back.
    tx.commit().await?;
    event!(Level::INFO, history_id = %history.id, "Status change committed.");

    Ok(AppliedStatusChange { order, history })
  }

  #[instrument(name = "pg_store::history_for", skip(self), err(Display))]
  async fn history_for(&self, order_id: Uuid) -> Result<Vec<OrderStatusHistory>> {
    let rows = sqlx::query_as::<_, OrderStatusHistory>(
      "SELECT id, order_id, status, note, created_at FROM order_status_history \
       WHERE order_id = $1 ORDER BY created_at DESC, id DESC",
    )
    .bind(order_id)
    .fetch_all(&self.pool)
    .await?;
    Ok(rows)
  }

  #[instrument(name = "pg_store::insert_order", skip(self, new_order), fields(order_number = %new_order.order_number), err(Display))]
  async fn insert_order(&self, new_order: NewOrder) -> Result<Order> {
    let insert = format!(
      "INSERT INTO orders (id, order_number, status, payment_status, subtotal_cents, shipping_cents, total_cents, \
       customer_id, customer_email, reseller_id) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {}",
      ORDER_COLUMNS
    );
    let total_cents = new_order.total_cents();
    let result = sqlx::query_as::<_, Order>(&insert)
      .bind(Uuid::new_v4())
      .bind(&new_order.order_number)
      .bind(&new_order.status)
      .bind(&new_order.payment_status)
      .bind(new_order.subtotal_cents)
      .bind(new_order.shipping_cents)
      .bind(total_cents)
      .bind(new_order.customer_id)
      .bind(new_order.customer_email.as_deref())
      .bind(new_order.reseller_id)
      .fetch_one(&self.pool)
      .await;

    match result {
      Ok(order) => Ok(order),
      Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(AppError::Validation(format!(
        "Order number {} already exists",
        new_order.order_number
      ))),
      Err(e) => Err(e.into()),
    }
  }
}
