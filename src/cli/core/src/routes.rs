/* src/cli/core/src/routes.rs */

use waypoint_server_axum::DATA_PREFIX;
use waypoint_server_axum::waypoint_server::WaypointServer;

use crate::ui::{self, DIM, RESET};

/// `(page route, data route)` for every registered page.
pub fn route_table(server: &WaypointServer) -> Vec<(String, String)> {
  server.routes().map(|r| (r.to_string(), format!("{DATA_PREFIX}{r}"))).collect()
}

pub fn print_routes(server: &WaypointServer) {
  let table = route_table(server);
  let width = table.iter().map(|(page, _)| page.len()).max().unwrap_or(0);
  for (page, data) in &table {
    ui::detail(&format!("GET {page:<width$}  {DIM}{data}{RESET}"));
  }
  ui::ok(&format!("{} pages", table.len()));
}

#[cfg(test)]
mod tests {
  use waypoint_server_axum::waypoint_server::{LoaderDef, PageDef, WaypointError};

  use super::*;

  #[test]
  fn data_route_mirrors_page_route() {
    let loader =
      LoaderDef::new("content", |_| async { Ok::<_, WaypointError>(serde_json::json!({})) });
    let server = WaypointServer::new().page(PageDef::new("/catalog").loader(loader));
    assert_eq!(
      route_table(&server),
      vec![("/catalog".to_string(), "/_waypoint/data/catalog".to_string())]
    );
  }
}
