/* src/server/core/rust/src/page.rs */

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::WaypointError;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Route parameters as extracted by the router, e.g. `{lang, name}`.
pub type RouteParams = HashMap<String, String>;

pub type LoaderFn =
  Arc<dyn Fn(RouteParams) -> BoxFuture<Result<serde_json::Value, WaypointError>> + Send + Sync>;

/// Script ID for the injected data JSON.
pub const DEFAULT_DATA_ID: &str = "__data";

/// One keyed unit of page data. The loader's value lands under `data_key`.
pub struct LoaderDef {
  pub data_key: String,
  pub loader: LoaderFn,
}

impl LoaderDef {
  pub fn new<F, Fut>(data_key: impl Into<String>, f: F) -> Self
  where
    F: Fn(RouteParams) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<serde_json::Value, WaypointError>> + Send + 'static,
  {
    let loader: LoaderFn = Arc::new(move |params| Box::pin(f(params)) as BoxFuture<_>);
    Self { data_key: data_key.into(), loader }
  }
}

pub struct PageDef {
  /// Axum route syntax, e.g. "/{lang}/roadmaps/{name}"
  pub route: String,
  pub loaders: Vec<LoaderDef>,
  pub data_id: String,
}

impl PageDef {
  pub fn new(route: impl Into<String>) -> Self {
    Self { route: route.into(), loaders: Vec::new(), data_id: DEFAULT_DATA_ID.to_string() }
  }

  pub fn loader(mut self, loader: LoaderDef) -> Self {
    self.loaders.push(loader);
    self
  }

  pub fn data_id(mut self, id: impl Into<String>) -> Self {
    self.data_id = id.into();
    self
  }

  pub fn data_keys(&self) -> impl Iterator<Item = &str> {
    self.loaders.iter().map(|l| l.data_key.as_str())
  }
}
