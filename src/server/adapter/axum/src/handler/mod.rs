/* src/server/adapter/axum/src/handler/mod.rs */

mod page;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use waypoint_server::PageDef;

/// Prefix under which every page's raw loader data is served.
pub const DATA_PREFIX: &str = "/_waypoint/data";

pub(crate) struct AppState {
  /// Keyed by matched route pattern; both the HTML and the data route point
  /// at the same page.
  pub pages: HashMap<String, Arc<PageDef>>,
}

pub(crate) fn build_router(pages: Vec<PageDef>) -> Router {
  let mut page_map = HashMap::new();
  let mut router = Router::new();

  for page in pages {
    let data_route = format!("{DATA_PREFIX}{}", page.route);
    let page_arc = Arc::new(page);
    page_map.insert(page_arc.route.clone(), page_arc.clone());
    page_map.insert(data_route.clone(), page_arc.clone());
    router = router
      .route(&page_arc.route, get(page::handle_page))
      .route(&data_route, get(page::handle_data));
  }

  router.with_state(Arc::new(AppState { pages: page_map }))
}
