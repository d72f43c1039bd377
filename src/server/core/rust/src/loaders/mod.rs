/* src/server/core/rust/src/loaders/mod.rs */

// Page loaders: static content lookup by route identifiers, and the
// pass-through fetch of the internal catalog API.

pub mod api;
pub mod content;

pub use api::{ApiLoader, CATALOG_ENDPOINT, CatalogPage, api_loader};
pub use content::{
  ArticlePage, RoadmapPage, article_loader, resolve_article, resolve_roadmap, roadmap_loader,
};
