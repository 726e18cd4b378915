// loja_server/src/services/seed.rs

//! Demo orders for local runs (`SEED_DB=true`).

use crate::errors::{AppError, Result as AppResult};
use crate::models::NewOrder;
use crate::store::OrderStore;
use tracing::{info, instrument};

pub fn demo_orders() -> Vec<NewOrder> {
  vec![
    NewOrder::pending("1001", 12990, 1500).with_customer_email("ana@cliente.example"),
    NewOrder::pending("1002", 4590, 0).with_customer_email("bruno@cliente.example"),
    NewOrder::pending("1003", 25900, 2390),
  ]
}

/// Inserts the demo orders that do not exist yet. Returns how many were added.
#[instrument(name = "seed::seed_demo_orders", skip(store), err(Display))]
pub async fn seed_demo_orders(store: &dyn OrderStore) -> AppResult<usize> {
  let mut inserted = 0;
  for order in demo_orders() {
    if store.find_by_number(&order.order_number).await?.is_some() {
      continue;
    }
    match store.insert_order(order).await {
      Ok(created) => {
        info!(order_number = %created.order_number, "Seeded demo order.");
        inserted += 1;
      }
      // Lost a race with another instance seeding the same number.
      Err(AppError::Validation(_)) => {}
      Err(e) => return Err(e),
    }
  }
  Ok(inserted)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::MemoryOrderStore;

  #[tokio::test]
  async fn seeding_is_repeatable() {
    let store = MemoryOrderStore::new();
    assert_eq!(seed_demo_orders(&store).await.unwrap(), 3);
    assert_eq!(seed_demo_orders(&store).await.unwrap(), 0);
    assert!(store.find_by_number("1002").await.unwrap().is_some());
  }
}
