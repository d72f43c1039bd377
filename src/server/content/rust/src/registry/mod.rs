/* src/server/content/rust/src/registry/mod.rs */

// Startup-built (language, name) -> record maps. Written once by the builder,
// read-only afterwards.

mod builder;
mod link;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::errors::ResolveError;
use crate::key::ContentKey;
use crate::model::{Article, RoadmapOverview};
use crate::store::ContentStore;

pub use builder::RegistryBuilder;
pub use link::{RecordKind, RecordLink};

#[derive(Debug, Default)]
pub struct ContentRegistry {
  roadmaps: BTreeMap<ContentKey, Arc<RoadmapOverview>>,
  articles: BTreeMap<ContentKey, Arc<Article>>,
}

impl ContentRegistry {
  pub fn builder() -> RegistryBuilder {
    RegistryBuilder::default()
  }

  pub fn roadmap_keys(&self) -> impl Iterator<Item = &ContentKey> {
    self.roadmaps.keys()
  }

  pub fn article_keys(&self) -> impl Iterator<Item = &ContentKey> {
    self.articles.keys()
  }

  pub fn roadmap_count(&self) -> usize {
    self.roadmaps.len()
  }

  pub fn article_count(&self) -> usize {
    self.articles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.roadmaps.is_empty() && self.articles.is_empty()
  }

  /// Languages that have at least one record.
  pub fn languages(&self) -> BTreeSet<&str> {
    self.roadmaps.keys().chain(self.articles.keys()).map(|k| k.lang.as_str()).collect()
  }

  pub fn contains(&self, link: &RecordLink) -> bool {
    match link.kind {
      RecordKind::Roadmap => self.roadmaps.contains_key(&link.key),
      RecordKind::Article => self.articles.contains_key(&link.key),
    }
  }
}

fn lookup_key(lang: &str, name: &str) -> ContentKey {
  // Malformed identifiers simply miss the map.
  ContentKey { lang: lang.to_string(), name: name.to_string() }
}

impl ContentStore for ContentRegistry {
  fn roadmap(&self, lang: &str, name: &str) -> Result<Arc<RoadmapOverview>, ResolveError> {
    self.roadmaps.get(&lookup_key(lang, name)).cloned().ok_or(ResolveError::NotFound)
  }

  fn article(&self, lang: &str, name: &str) -> Result<Arc<Article>, ResolveError> {
    self.articles.get(&lookup_key(lang, name)).cloned().ok_or(ResolveError::NotFound)
  }
}
