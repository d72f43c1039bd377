/* src/server/core/rust/src/server.rs */

use std::sync::Arc;

use waypoint_content::ContentStore;

use crate::builtin::{article_page, catalog_page, roadmap_page};
use crate::loaders::ApiLoader;
use crate::page::PageDef;

/// Framework-agnostic parts extracted from `WaypointServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct WaypointParts {
  pub pages: Vec<PageDef>,
}

impl WaypointParts {
  pub fn routes(&self) -> impl Iterator<Item = &str> {
    self.pages.iter().map(|p| p.route.as_str())
  }
}

#[derive(Default)]
pub struct WaypointServer {
  pages: Vec<PageDef>,
}

impl WaypointServer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn page(mut self, page: PageDef) -> Self {
    self.pages.push(page);
    self
  }

  /// Roadmap and article pages backed by `store`.
  pub fn content(self, store: Arc<dyn ContentStore>) -> Self {
    self.page(roadmap_page(store.clone())).page(article_page(store))
  }

  /// Catalog page backed by the internal API.
  pub fn catalog(self, api: ApiLoader) -> Self {
    self.page(catalog_page(api))
  }

  pub fn routes(&self) -> impl Iterator<Item = &str> {
    self.pages.iter().map(|p| p.route.as_str())
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  pub fn into_parts(self) -> WaypointParts {
    WaypointParts { pages: self.pages }
  }
}
