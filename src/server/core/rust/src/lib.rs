/* src/server/core/rust/src/lib.rs */

pub mod builtin;
pub mod document;
pub mod errors;
pub mod loaders;
pub mod page;
pub mod server;

pub use builtin::{ARTICLE_ROUTE, CATALOG_ROUTE, ROADMAP_ROUTE};
pub use document::{
  Document, escape_html, escape_json_for_script, page_body, page_title, render_document,
};
pub use errors::{ErrorKind, WaypointError};
pub use loaders::{ApiLoader, CATALOG_ENDPOINT, CatalogPage};
pub use page::{BoxFuture, DEFAULT_DATA_ID, LoaderDef, LoaderFn, PageDef, RouteParams};
pub use server::{WaypointParts, WaypointServer};

// Re-exports for adapter crates
pub use serde_json;
pub use waypoint_content;
