// loja_server/src/web/response.rs

use actix_web::HttpResponse;
use serde::Serialize;

/// Body of every successful API response. Failures use the same shape with
/// `error` instead of `data`; see `AppError::error_response`.
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T: Serialize> {
  pub success: bool,
  pub data: T,
}

pub fn success<T: Serialize>(data: T) -> HttpResponse {
  HttpResponse::Ok().json(ApiSuccess { success: true, data })
}
