// loja_server/src/lib.rs

//! HTTP service for the order status workflow: status updates from the
//! supplier portal and back office, order lookups and the status registry.

pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod services;
pub mod state;
pub mod store;
pub mod web;
