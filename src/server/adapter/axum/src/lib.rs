/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;
mod middleware;

use waypoint_server::WaypointServer;

/// Re-export waypoint-server core for convenience
pub use waypoint_server;

pub use handler::DATA_PREFIX;

/// Extension trait that converts a `WaypointServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for WaypointServer {
  fn into_axum_router(self) -> axum::Router {
    let parts = self.into_parts();
    handler::build_router(parts.pages).layer(axum::middleware::from_fn(middleware::trace_request))
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "waypoint listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}
