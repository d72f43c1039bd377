/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WaypointConfig {
  pub site: SiteSection,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub content: ContentSection,
  #[serde(default)]
  pub api: ApiSection,
  #[serde(default)]
  pub log: LogSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
  pub name: String,
  #[serde(default = "default_languages")]
  pub languages: Vec<String>,
  #[serde(default = "default_language")]
  pub default_language: String,
}

impl SiteSection {
  pub fn validate(&self) -> Result<()> {
    if self.languages.is_empty() {
      bail!("site.languages must not be empty");
    }
    if !self.languages.contains(&self.default_language) {
      bail!(
        "site.default_language \"{}\" is not in site.languages {:?}",
        self.default_language,
        self.languages
      );
    }
    Ok(())
  }
}

fn default_languages() -> Vec<String> {
  vec![default_language()]
}

fn default_language() -> String {
  "en".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  pub static_dir: Option<PathBuf>,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port(), static_dir: None }
  }
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  3000
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
  /// Load and validate everything once at startup.
  #[default]
  Memory,
  /// Re-read record files on every request.
  Live,
}

impl ContentMode {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Memory => "memory",
      Self::Live => "live",
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSection {
  #[serde(default = "default_content_dir")]
  pub dir: PathBuf,
  #[serde(default)]
  pub mode: ContentMode,
}

impl Default for ContentSection {
  fn default() -> Self {
    Self { dir: default_content_dir(), mode: ContentMode::default() }
  }
}

fn default_content_dir() -> PathBuf {
  PathBuf::from("content")
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSection {
  /// Origin the catalog endpoint is fetched from; the site's own address when unset.
  pub base_url: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  #[default]
  Compact,
  Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
  #[serde(default = "default_filter")]
  pub filter: String,
  #[serde(default)]
  pub format: LogFormat,
}

impl Default for LogSection {
  fn default() -> Self {
    Self { filter: default_filter(), format: LogFormat::default() }
  }
}

fn default_filter() -> String {
  "info".to_string()
}

impl WaypointConfig {
  pub fn validate(&self) -> Result<()> {
    self.site.validate()?;
    if let Some(ref url) = self.api.base_url
      && !(url.starts_with("http://") || url.starts_with("https://"))
    {
      bail!("api.base_url must be an http(s) URL, got \"{url}\"");
    }
    Ok(())
  }

  pub fn api_base_url(&self) -> String {
    match self.api.base_url {
      Some(ref url) => url.clone(),
      None => format!("http://{}:{}", self.server.host, self.server.port),
    }
  }

  /// Make relative paths relative to the directory holding the config file.
  pub fn resolve_paths(&mut self, base_dir: &Path) {
    if self.content.dir.is_relative() {
      self.content.dir = base_dir.join(&self.content.dir);
    }
    if let Some(ref dir) = self.server.static_dir
      && dir.is_relative()
    {
      self.server.static_dir = Some(base_dir.join(dir));
    }
  }
}
