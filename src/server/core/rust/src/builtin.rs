/* src/server/core/rust/src/builtin.rs */

use std::sync::Arc;

use waypoint_content::ContentStore;

use crate::loaders::{ApiLoader, api_loader, article_loader, roadmap_loader};
use crate::page::PageDef;

pub const ROADMAP_ROUTE: &str = "/{lang}/roadmaps/{name}";
pub const ARTICLE_ROUTE: &str = "/{lang}/articles/{name}";
pub const CATALOG_ROUTE: &str = "/catalog";

pub fn roadmap_page(store: Arc<dyn ContentStore>) -> PageDef {
  PageDef::new(ROADMAP_ROUTE).loader(roadmap_loader(store))
}

pub fn article_page(store: Arc<dyn ContentStore>) -> PageDef {
  PageDef::new(ARTICLE_ROUTE).loader(article_loader(store))
}

pub fn catalog_page(api: ApiLoader) -> PageDef {
  PageDef::new(CATALOG_ROUTE).loader(api_loader(api))
}
