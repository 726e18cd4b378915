// loja_server/src/models/mod.rs

//! Rows of the `orders` and `order_status_history` tables.

pub mod order;
pub mod order_status_history;

pub use order::{NewOrder, Order};
pub use order_status_history::OrderStatusHistory;
