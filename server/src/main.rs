// loja_server/src/main.rs

use anyhow::Context;
use loja_server::config::{AppConfig, StoreBackend};
use loja_server::services::seed;
use loja_server::state::AppState;
use loja_server::store::{MemoryOrderStore, OrderStore, PgOrderStore};
use loja_server::web::configure_app_routes;

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting order status service...");

  let app_config = Arc::new(AppConfig::from_env().context("loading configuration")?);

  let store: Arc<dyn OrderStore> = match app_config.store_backend {
    StoreBackend::Postgres => {
      let database_url = app_config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres store")?;
      let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("connecting to the database")?;
      tracing::info!("Connected to the database.");

      let pg_store = PgOrderStore::new(pool);
      if app_config.run_migrations {
        pg_store.run_migrations().await.context("running database migrations")?;
      }
      Arc::new(pg_store)
    }
    StoreBackend::Memory => {
      tracing::warn!("Using the in-memory order store; data is lost on restart.");
      Arc::new(MemoryOrderStore::new())
    }
  };

  if app_config.seed_db {
    let inserted = seed::seed_demo_orders(store.as_ref())
      .await
      .context("seeding demo orders")?;
    tracing::info!(inserted, "Demo orders seeded.");
  }

  let app_state = AppState::new(store, app_config.clone());

  let server_address = app_config.bind_address();
  tracing::info!("Binding server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("binding {}", server_address))?
  .run()
  .await
  .context("running HTTP server")?;

  Ok(())
}
