// loja_server/src/config.rs

use crate::errors::{AppError, Result};
use chrono::FixedOffset;
use dotenvy::dotenv;
use loja_core::Role;
use std::env;
use std::str::FromStr;

/// Which `OrderStore` backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
  Postgres,
  Memory,
}

impl FromStr for StoreBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "postgres" | "pg" => Ok(StoreBackend::Postgres),
      "memory" | "mem" => Ok(StoreBackend::Memory),
      other => Err(AppError::Config(format!("Invalid STORE value '{}'", other))),
    }
  }
}

/// One entry of the static API-key table. `key_hash` is an argon2 PHC string;
/// the plain key is never kept in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyEntry {
  pub name: String,
  pub role: Role,
  pub key_hash: String,
}

impl std::fmt::Debug for ApiKeyEntry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ApiKeyEntry")
      .field("name", &self.name)
      .field("role", &self.role)
      .field("key_hash", &"[REDACTED]")
      .finish()
  }
}

/// Parses `name:role:hash` entries separated by `;`.
pub fn parse_api_keys(raw: &str) -> Result<Vec<ApiKeyEntry>> {
  raw
    .split(';')
    .map(str::trim)
    .filter(|entry| !entry.is_empty())
    .map(|entry| {
      let mut parts = entry.splitn(3, ':');
      let (Some(name), Some(role), Some(key_hash)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(AppError::Config(format!(
          "API_KEYS entry must look like name:role:hash, got '{}'",
          entry.split(':').next().unwrap_or_default()
        )));
      };
      let role = role
        .parse::<Role>()
        .map_err(|e| AppError::Config(format!("API_KEYS entry '{}': {}", name, e)))?;
      if name.trim().is_empty() || key_hash.trim().is_empty() {
        return Err(AppError::Config("API_KEYS entry with empty name or hash".to_string()));
      }
      Ok(ApiKeyEntry {
        name: name.trim().to_string(),
        role,
        key_hash: key_hash.trim().to_string(),
      })
    })
    .collect()
}

/// A whole-hour UTC offset, e.g. `-3` for Brasília.
pub fn offset_from_hours(hours: i32) -> Result<FixedOffset> {
  hours
    .checked_mul(3600)
    .and_then(FixedOffset::east_opt)
    .ok_or_else(|| AppError::Config(format!("UTC offset out of range: {} hours", hours)))
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub store_backend: StoreBackend,
  /// Required only for the Postgres backend.
  pub database_url: Option<String>,
  pub api_keys: Vec<ApiKeyEntry>,
  pub notification_sender: String,
  /// Offset used for dates shown to customers (`{data}`). Brasília time by default.
  pub notification_utc_offset: FixedOffset,
  pub run_migrations: bool,
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };
    let get_flag = |var_name: &str| {
      get_env(var_name)
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .map_err(|e| AppError::Config(format!("Invalid {} value: {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let store_backend = get_env("STORE")
      .unwrap_or_else(|_| "postgres".to_string())
      .parse::<StoreBackend>()?;
    let database_url = match store_backend {
      StoreBackend::Postgres => Some(get_env("DATABASE_URL")?),
      StoreBackend::Memory => get_env("DATABASE_URL").ok(),
    };

    let api_keys = parse_api_keys(&get_env("API_KEYS")?)?;
    if api_keys.is_empty() {
      return Err(AppError::Config("API_KEYS defines no keys".to_string()));
    }

    let notification_sender =
      get_env("NOTIFICATION_SENDER").unwrap_or_else(|_| "pedidos@loja.example".to_string());
    let offset_hours = get_env("NOTIFICATION_UTC_OFFSET_HOURS")
      .unwrap_or_else(|_| "-3".to_string())
      .parse::<i32>()
      .map_err(|e| AppError::Config(format!("Invalid NOTIFICATION_UTC_OFFSET_HOURS: {}", e)))?;
    let notification_utc_offset = offset_from_hours(offset_hours)?;
    let run_migrations = get_flag("RUN_MIGRATIONS")?;
    let seed_db = get_flag("SEED_DB")?;

    tracing::info!(
      store = ?store_backend,
      api_keys = api_keys.len(),
      "Application configuration loaded."
    );

    Ok(Self {
      server_host,
      server_port,
      store_backend,
      database_url,
      api_keys,
      notification_sender,
      notification_utc_offset,
      run_migrations,
      seed_db,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
