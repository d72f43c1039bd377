/* src/server/content/rust/src/store.rs */

use std::path::PathBuf;
use std::sync::Arc;

use crate::errors::{ContentError, ResolveError};
use crate::key::ContentKey;
use crate::model::{Article, RoadmapOverview};
use crate::parse::{article_path, parse_article, parse_roadmap, roadmap_path};
use crate::slug::derive_slug;

/// Read-only lookup of content records by route identifiers.
///
/// `lang` and `name` arrive verbatim from the URL. Implementations must treat
/// any identifier they cannot map to a record as [`ResolveError::NotFound`].
pub trait ContentStore: Send + Sync {
  fn roadmap(&self, lang: &str, name: &str) -> Result<Arc<RoadmapOverview>, ResolveError>;

  fn article(&self, lang: &str, name: &str) -> Result<Arc<Article>, ResolveError>;
}

/// Live store that reads the record file on every lookup.
/// Edits show up without a restart; nothing is validated up front.
pub struct DirectoryStore {
  root: PathBuf,
}

impl DirectoryStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  fn read(&self, path: &std::path::Path) -> Result<(String, String), ContentError> {
    let text = std::fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
    let slug = derive_slug(&self.root, path)?;
    Ok((text, slug))
  }
}

impl ContentStore for DirectoryStore {
  fn roadmap(&self, lang: &str, name: &str) -> Result<Arc<RoadmapOverview>, ResolveError> {
    let key = ContentKey::new(lang, name)?;
    let path = roadmap_path(&self.root, &key);
    tracing::debug!(%key, path = %path.display(), "live roadmap read");
    let (text, slug) = self.read(&path)?;
    Ok(Arc::new(parse_roadmap(&path, &text, slug)?))
  }

  fn article(&self, lang: &str, name: &str) -> Result<Arc<Article>, ResolveError> {
    let key = ContentKey::new(lang, name)?;
    let path = article_path(&self.root, &key);
    tracing::debug!(%key, path = %path.display(), "live article read");
    let (text, slug) = self.read(&path)?;
    Ok(Arc::new(parse_article(&path, &text, slug)?))
  }
}
