/* src/server/core/rust/src/loaders/content.rs */

use std::sync::Arc;

use serde::Serialize;
use waypoint_content::{Article, ContentStore, NOT_FOUND_MESSAGE, ResolveError, RoadmapOverview};

use crate::errors::WaypointError;
use crate::page::{LoaderDef, RouteParams};

pub const ROADMAP_KEY: &str = "roadmap";
pub const ARTICLE_KEY: &str = "article";

#[derive(Debug, Clone, Serialize)]
pub struct RoadmapPage {
  pub roadmap: Arc<RoadmapOverview>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticlePage {
  pub article: Arc<Article>,
}

/// Store failures keep their detail in the log only. Clients see a fixed message.
fn resolve_failure(err: ResolveError, kind: &str, lang: &str, name: &str) -> WaypointError {
  match err {
    ResolveError::NotFound => {
      tracing::debug!(kind, lang, name, "content not found");
      WaypointError::not_found(NOT_FOUND_MESSAGE)
    }
    ResolveError::Internal(detail) => {
      tracing::error!(kind, lang, name, %detail, "content store failure");
      WaypointError::internal("Content unavailable")
    }
  }
}

pub fn resolve_roadmap(
  store: &dyn ContentStore,
  lang: &str,
  name: &str,
) -> Result<RoadmapPage, WaypointError> {
  let roadmap =
    store.roadmap(lang, name).map_err(|e| resolve_failure(e, ROADMAP_KEY, lang, name))?;
  Ok(RoadmapPage { roadmap })
}

pub fn resolve_article(
  store: &dyn ContentStore,
  lang: &str,
  name: &str,
) -> Result<ArticlePage, WaypointError> {
  let article =
    store.article(lang, name).map_err(|e| resolve_failure(e, ARTICLE_KEY, lang, name))?;
  Ok(ArticlePage { article })
}

fn route_pair(params: &RouteParams) -> (String, String) {
  let lang = params.get("lang").cloned().unwrap_or_default();
  let name = params.get("name").cloned().unwrap_or_default();
  (lang, name)
}

/// Live stores read from disk, so lookups run on the blocking pool.
async fn lookup<T, F>(store: Arc<dyn ContentStore>, f: F) -> Result<T, WaypointError>
where
  T: Send + 'static,
  F: FnOnce(&dyn ContentStore) -> Result<T, WaypointError> + Send + 'static,
{
  tokio::task::spawn_blocking(move || f(store.as_ref()))
    .await
    .map_err(|e| WaypointError::internal(e.to_string()))?
}

fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value, WaypointError> {
  serde_json::to_value(value).map_err(|e| WaypointError::internal(e.to_string()))
}

/// Page loader publishing the resolved overview under `roadmap`.
pub fn roadmap_loader(store: Arc<dyn ContentStore>) -> LoaderDef {
  LoaderDef::new(ROADMAP_KEY, move |params: RouteParams| {
    let store = store.clone();
    async move {
      let (lang, name) = route_pair(&params);
      let page = lookup(store, move |s| resolve_roadmap(s, &lang, &name)).await?;
      to_value(&page.roadmap)
    }
  })
}

/// Page loader publishing the resolved article under `article`.
pub fn article_loader(store: Arc<dyn ContentStore>) -> LoaderDef {
  LoaderDef::new(ARTICLE_KEY, move |params: RouteParams| {
    let store = store.clone();
    async move {
      let (lang, name) = route_pair(&params);
      let page = lookup(store, move |s| resolve_article(s, &lang, &name)).await?;
      to_value(&page.article)
    }
  })
}
