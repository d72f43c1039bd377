/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use waypoint_server::WaypointError;

/// Newtype so `WaypointError` can be returned straight from handlers.
pub(crate) struct AxumError(pub WaypointError);

impl From<WaypointError> for AxumError {
  fn from(err: WaypointError) -> Self {
    Self(err)
  }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
  ok: bool,
  error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
  code: &'a str,
  message: &'a str,
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let status =
      StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body =
      ErrorBody { ok: false, error: ErrorDetail { code: self.0.code(), message: self.0.message() } };
    (status, axum::Json(body)).into_response()
  }
}
