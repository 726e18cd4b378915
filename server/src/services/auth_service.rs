// loja_server/src/services/auth_service.rs

//! API-key hashing and verification.
//!
//! Keys are configured as argon2 PHC strings. Verification reads the
//! argon2 parameters from each stored hash.

use crate::config::ApiKeyEntry;
use crate::errors::AppError;
use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2, Params,
};
use loja_core::Role;
use serde::Serialize;
use tracing::{debug, error, instrument, warn};

/// The caller identified by a valid `X-API-Key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeyPrincipal {
  pub name: String,
  pub role: Role,
}

/// Hashes an API key with the default argon2 parameters.
#[instrument(name = "auth_service::hash_api_key", skip(api_key), err(Display))]
pub fn hash_api_key(api_key: &str) -> Result<String, AppError> {
  hash_api_key_with(&Argon2::default(), api_key)
}

/// Hashes an API key with explicit argon2 cost parameters.
pub fn hash_api_key_with_params(api_key: &str, params: Params) -> Result<String, AppError> {
  let hasher = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
  hash_api_key_with(&hasher, api_key)
}

fn hash_api_key_with(hasher: &Argon2<'_>, api_key: &str) -> Result<String, AppError> {
  if api_key.is_empty() {
    return Err(AppError::Validation("API key cannot be empty for hashing.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  match hasher.hash_password(api_key.as_bytes(), &salt) {
    Ok(hash) => Ok(hash.to_string()),
    Err(argon_err) => {
      error!(error = %argon_err, "Argon2 API key hashing failed.");
      Err(AppError::Internal(format!("API key hashing failed: {}", argon_err)))
    }
  }
}

/// Checks `presented_key` against one stored hash.
///
/// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
pub fn verify_api_key(stored_hash: &str, presented_key: &str) -> Result<bool, AppError> {
  let parsed_hash = PasswordHash::new(stored_hash).map_err(|parse_err| {
    error!(error = %parse_err, "Failed to parse stored API key hash.");
    AppError::Internal(format!("Invalid stored API key hash: {}", parse_err))
  })?;

  match Argon2::default().verify_password(presented_key.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => Ok(false),
    Err(other) => {
      error!(error = %other, "Argon2 API key verification encountered an error.");
      Err(AppError::Internal(format!("API key verification failed: {}", other)))
    }
  }
}

/// Resolves the principal owning `presented_key`.
///
/// A missing, blank or unknown key is `AppError::Auth`. An entry whose hash
/// cannot be parsed is logged and skipped, so one bad entry does not lock
/// out the others.
#[instrument(name = "auth_service::authenticate", skip_all, fields(configured_keys = keys.len()))]
pub fn authenticate(keys: &[ApiKeyEntry], presented_key: Option<&str>) -> Result<ApiKeyPrincipal, AppError> {
  let presented_key = match presented_key.map(str::trim) {
    Some(key) if !key.is_empty() => key,
    _ => {
      debug!("Request without API key.");
      return Err(AppError::Auth("Missing API key".to_string()));
    }
  };

  for entry in keys {
    match verify_api_key(&entry.key_hash, presented_key) {
      Ok(true) => {
        debug!(key_name = %entry.name, role = %entry.role, "API key accepted.");
        return Ok(ApiKeyPrincipal {
          name: entry.name.clone(),
          role: entry.role,
        });
      }
      Ok(false) => {}
      Err(e) => warn!(key_name = %entry.name, error = %e, "Skipping unusable API key entry."),
    }
  }

  Err(AppError::Auth("Invalid API key".to_string()))
}
