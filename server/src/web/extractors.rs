// loja_server/src/web/extractors.rs

use crate::errors::AppError;
use crate::services::auth_service::{self, ApiKeyPrincipal};
use crate::state::AppState;
use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Resolves the caller from the `X-API-Key` header. Rejects with 401 before
/// any other extractor or the handler body runs.
impl FromRequest for ApiKeyPrincipal {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let config = req.app_data::<web::Data<AppState>>().map(|state| state.config.clone());
    let presented_key = req
      .headers()
      .get(API_KEY_HEADER)
      .and_then(|value| value.to_str().ok())
      .map(str::to_owned);

    Box::pin(async move {
      let config = config.ok_or_else(|| AppError::Internal("Application state is not configured.".to_string()))?;
      // argon2 is CPU-bound; keep it off the async worker.
      web::block(move || auth_service::authenticate(&config.api_keys, presented_key.as_deref()))
        .await
        .map_err(|blocking_err| AppError::Internal(format!("API key check did not complete: {}", blocking_err)))?
    })
  }
}
