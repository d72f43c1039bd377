/* src/server/adapter/axum/src/middleware.rs */

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

pub(crate) async fn trace_request(request: Request<Body>, next: Next) -> Response {
  let span = tracing::info_span!(
    "http.request",
    method = %request.method(),
    path = %request.uri().path(),
  );

  async move {
    let response = next.run(request).await;
    let status = response.status();
    if status.is_server_error() {
      tracing::warn!(status = status.as_u16(), "request failed");
    } else {
      tracing::debug!(status = status.as_u16(), "request finished");
    }
    response
  }
  .instrument(span)
  .await
}
