/* src/cli/core/src/serve.rs */

// `waypoint serve`: build the content store, mount the built-in pages and
// static assets, and run the HTTP server.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tower_http::services::ServeDir;
use waypoint_content::{ContentStore, DirectoryStore, load_directory};
use waypoint_server_axum::IntoAxumRouter;
use waypoint_server_axum::waypoint_server::{ApiLoader, WaypointServer};

use crate::config::{ContentMode, WaypointConfig};
use crate::ui::{self, DIM, RESET};

/// Mount point for `server.static_dir`.
pub const STATIC_PREFIX: &str = "/static";

/// Command-line values that take precedence over `waypoint.toml`.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
  pub port: Option<u16>,
  pub content_dir: Option<&'a Path>,
  pub live: bool,
}

pub fn apply_overrides(config: &mut WaypointConfig, overrides: &Overrides<'_>) {
  if let Some(port) = overrides.port {
    config.server.port = port;
  }
  if let Some(dir) = overrides.content_dir {
    config.content.dir = dir.to_path_buf();
  }
  if overrides.live {
    config.content.mode = ContentMode::Live;
  }
}

pub fn build_store(config: &WaypointConfig) -> Result<Arc<dyn ContentStore>> {
  let dir = &config.content.dir;
  if !dir.is_dir() {
    bail!("content directory {} does not exist", dir.display());
  }
  match config.content.mode {
    ContentMode::Memory => {
      let registry = load_directory(dir, &config.site.languages)
        .with_context(|| format!("failed to load content from {}", dir.display()))?;
      tracing::info!(
        roadmaps = registry.roadmap_count(),
        articles = registry.article_count(),
        "content loaded"
      );
      Ok(Arc::new(registry))
    }
    ContentMode::Live => {
      tracing::info!(dir = %dir.display(), "serving content live from disk");
      Ok(Arc::new(DirectoryStore::new(dir)))
    }
  }
}

pub fn build_server(config: &WaypointConfig) -> Result<WaypointServer> {
  let store = build_store(config)?;
  let api = ApiLoader::new(&config.api_base_url());
  tracing::debug!(url = api.url(), "catalog endpoint");
  Ok(WaypointServer::new().content(store).catalog(api))
}

pub fn build_app(config: &WaypointConfig) -> Result<axum::Router> {
  let router = build_server(config)?.into_axum_router();
  Ok(match config.server.static_dir {
    Some(ref dir) => {
      if !dir.is_dir() {
        ui::warn(&format!("static_dir {} does not exist", dir.display()));
      }
      router.nest_service(STATIC_PREFIX, ServeDir::new(dir))
    }
    None => router,
  })
}

pub async fn run_serve(config: &WaypointConfig) -> Result<()> {
  let app = build_app(config)?;
  let addr = format!("{}:{}", config.server.host, config.server.port);
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  let local_addr = listener.local_addr()?;

  ui::ok(&format!("{} running on http://{local_addr}", config.site.name));
  ui::detail(&format!(
    "{DIM}content: {} ({}){RESET}",
    config.content.dir.display(),
    config.content.mode.as_str()
  ));

  axum::serve(listener, app).await.context("server error")?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use axum::body::Body;
  use axum::http::{Request, StatusCode};
  use tower::ServiceExt;

  use super::*;

  const ROADMAP: &str = r#"
title = "Beginner Dapp Roadmap"
contentType = "roadmap"
excerpt = "From zero to a deployed dapp"

[metadata]
expertise = "beginner"
duration = "6 weeks"
"#;

  fn site(root: &Path, extra: &str) -> WaypointConfig {
    let roadmaps = root.join("content").join("en").join("roadmaps");
    std::fs::create_dir_all(&roadmaps).unwrap();
    std::fs::write(roadmaps.join("beginner-dapp-roadmap.toml"), ROADMAP).unwrap();
    let path = root.join("waypoint.toml");
    std::fs::write(&path, format!("[site]\nname = \"Waypoint\"\n{extra}")).unwrap();
    crate::config::load_waypoint_config(&path).unwrap()
  }

  async fn status_of(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
  }

  #[test]
  fn overrides_take_precedence() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = site(tmp.path(), "");
    let dir = tmp.path().join("other");
    let overrides = Overrides { port: Some(4100), content_dir: Some(&dir), live: true };
    apply_overrides(&mut config, &overrides);
    assert_eq!(config.server.port, 4100);
    assert_eq!(config.content.dir, dir);
    assert_eq!(config.content.mode, ContentMode::Live);
  }

  #[test]
  fn empty_overrides_keep_config() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = site(tmp.path(), "");
    apply_overrides(&mut config, &Overrides::default());
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.content.mode, ContentMode::Memory);
  }

  #[test]
  fn missing_content_dir_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = site(tmp.path(), "");
    config.content.dir = tmp.path().join("nope");
    let err = build_store(&config).err().unwrap();
    assert!(err.to_string().contains("does not exist"));
  }

  #[test]
  fn invalid_content_fails_in_memory_mode_only() {
    let tmp = tempfile::tempdir().unwrap();
    let mut config = site(tmp.path(), "");
    std::fs::write(tmp.path().join("content/en/roadmaps/broken.toml"), "title = ").unwrap();
    assert!(build_store(&config).is_err());

    config.content.mode = ContentMode::Live;
    assert!(build_store(&config).is_ok());
  }

  #[test]
  fn registers_builtin_routes() {
    let tmp = tempfile::tempdir().unwrap();
    let config = site(tmp.path(), "");
    let server = build_server(&config).unwrap();
    assert_eq!(
      server.routes().collect::<Vec<_>>(),
      vec!["/{lang}/roadmaps/{name}", "/{lang}/articles/{name}", "/catalog"]
    );
  }

  #[tokio::test]
  async fn app_serves_roadmap_and_misses() {
    let tmp = tempfile::tempdir().unwrap();
    let app = build_app(&site(tmp.path(), "")).unwrap();

    let (status, body) =
      status_of(app.clone(), "/_waypoint/data/en/roadmaps/beginner-dapp-roadmap").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["roadmap"]["title"], "Beginner Dapp Roadmap");

    let (status, body) = status_of(app, "/en/roadmaps/nonexistent-roadmap").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["message"], "You missed it");
  }

  #[tokio::test]
  async fn app_serves_static_files() {
    let tmp = tempfile::tempdir().unwrap();
    let public = tmp.path().join("public");
    std::fs::create_dir_all(&public).unwrap();
    std::fs::write(public.join("site.css"), "body{}").unwrap();
    let app = build_app(&site(tmp.path(), "[server]\nstatic_dir = \"public\"\n")).unwrap();

    let (status, body) = status_of(app, "/static/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"body{}");
  }
}
