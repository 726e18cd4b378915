// tests/common/mod.rs
#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use argon2::Params;
use chrono::FixedOffset;
use loja_core::Role;
use loja_server::config::{ApiKeyEntry, AppConfig, StoreBackend};
use loja_server::models::{NewOrder, Order};
use loja_server::services::auth_service::hash_api_key_with_params;
use loja_server::state::AppState;
use loja_server::store::{MemoryOrderStore, OrderStore};
use loja_server::web::configure_app_routes;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::Level;

pub const SUPPLIER_KEY: &str = "chave-fornecedor-teste";
pub const ADMIN_KEY: &str = "chave-admin-teste";

// Hashed once per test binary with cheap argon2 parameters.
static API_KEYS: Lazy<Vec<ApiKeyEntry>> = Lazy::new(|| {
  let params = || Params::new(8 * 1024, 1, 1, None).expect("valid argon2 params");
  vec![
    ApiKeyEntry {
      name: "portal-fornecedor".to_string(),
      role: Role::Supplier,
      key_hash: hash_api_key_with_params(SUPPLIER_KEY, params()).expect("hash supplier key"),
    },
    ApiKeyEntry {
      name: "backoffice".to_string(),
      role: Role::Admin,
      key_hash: hash_api_key_with_params(ADMIN_KEY, params()).expect("hash admin key"),
    },
  ]
});

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    store_backend: StoreBackend::Memory,
    database_url: None,
    api_keys: API_KEYS.clone(),
    notification_sender: "pedidos@loja.test".to_string(),
    notification_utc_offset: FixedOffset::west_opt(3 * 3600).expect("valid offset"),
    run_migrations: false,
    seed_db: false,
  }
}

pub struct TestContext {
  pub state: AppState,
  pub store: Arc<MemoryOrderStore>,
}

impl TestContext {
  pub fn new() -> Self {
    setup_tracing();
    let store = Arc::new(MemoryOrderStore::new());
    let state = AppState::new(store.clone(), Arc::new(test_config()));
    Self { state, store }
  }

  pub async fn order(&self, new_order: NewOrder) -> Order {
    self.store.insert_order(new_order).await.expect("insert test order")
  }

  pub async fn reload(&self, order_number: &str) -> Order {
    self
      .store
      .find_by_number(order_number)
      .await
      .expect("lookup")
      .expect("order exists")
  }

  pub fn app(
    &self,
  ) -> App<
    impl ServiceFactory<
      ServiceRequest,
      Config = (),
      Response = ServiceResponse<BoxBody>,
      Error = actix_web::Error,
      InitError = (),
    >,
  > {
    App::new()
      .app_data(web::Data::new(self.state.clone()))
      .configure(configure_app_routes)
  }
}
