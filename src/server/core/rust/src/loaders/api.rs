/* src/server/core/rust/src/loaders/api.rs */

use serde::Serialize;

use crate::errors::WaypointError;
use crate::page::{LoaderDef, RouteParams};

/// Fixed path of the catalog endpoint on the site's own API surface.
pub const CATALOG_ENDPOINT: &str = "/api/catalog";

pub const CONTENT_KEY: &str = "content";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
  pub content: serde_json::Value,
}

/// GETs one JSON endpoint and hands the body back untouched.
/// No timeout, retry or caching is applied.
#[derive(Clone)]
pub struct ApiLoader {
  client: reqwest::Client,
  url: String,
}

impl ApiLoader {
  pub fn new(base_url: &str) -> Self {
    Self::with_client(reqwest::Client::new(), base_url)
  }

  pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
    let url = format!("{}{CATALOG_ENDPOINT}", base_url.trim_end_matches('/'));
    Self { client, url }
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  pub async fn fetch(&self) -> Result<serde_json::Value, WaypointError> {
    let resp = self
      .client
      .get(&self.url)
      .send()
      .await
      .map_err(|e| WaypointError::internal(format!("API request failed: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
      tracing::warn!(url = %self.url, %status, "API returned non-success status");
      return Err(WaypointError::upstream(format!("API returned {status}")));
    }

    resp
      .json::<serde_json::Value>()
      .await
      .map_err(|e| WaypointError::internal(format!("failed to parse API response: {e}")))
  }

  pub async fn load(&self) -> Result<CatalogPage, WaypointError> {
    Ok(CatalogPage { content: self.fetch().await? })
  }
}

/// Page loader republishing the API body under `content`.
pub fn api_loader(api: ApiLoader) -> LoaderDef {
  LoaderDef::new(CONTENT_KEY, move |_params: RouteParams| {
    let api = api.clone();
    async move {
      let page = api.load().await?;
      Ok(page.content)
    }
  })
}
