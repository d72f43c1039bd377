/* src/server/content/rust/src/registry/builder.rs */

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::{ContentRegistry, RecordLink};
use crate::errors::ContentError;
use crate::key::ContentKey;
use crate::model::{Article, RoadmapOverview};

#[derive(Default)]
pub struct RegistryBuilder {
  roadmaps: BTreeMap<ContentKey, Arc<RoadmapOverview>>,
  articles: BTreeMap<ContentKey, Arc<Article>>,
  languages: Option<BTreeSet<String>>,
}

impl RegistryBuilder {
  /// Restrict records to these languages. Without a list any valid language is accepted.
  pub fn languages<I, S>(mut self, languages: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let set: BTreeSet<String> = languages.into_iter().map(Into::into).collect();
    self.languages = if set.is_empty() { None } else { Some(set) };
    self
  }

  pub fn insert_roadmap(
    &mut self,
    key: ContentKey,
    roadmap: RoadmapOverview,
  ) -> Result<(), ContentError> {
    if self.roadmaps.contains_key(&key) {
      return Err(ContentError::Duplicate { kind: "roadmap", key });
    }
    self.roadmaps.insert(key, Arc::new(roadmap));
    Ok(())
  }

  pub fn insert_article(&mut self, key: ContentKey, article: Article) -> Result<(), ContentError> {
    if self.articles.contains_key(&key) {
      return Err(ContentError::Duplicate { kind: "article", key });
    }
    self.articles.insert(key, Arc::new(article));
    Ok(())
  }

  /// Freeze the maps, then check languages and internal links across the whole set.
  /// Every problem is collected before failing.
  pub fn build(self) -> Result<ContentRegistry, ContentError> {
    let registry = ContentRegistry { roadmaps: self.roadmaps, articles: self.articles };
    let mut problems = Vec::new();

    if let Some(ref allowed) = self.languages {
      for key in registry.roadmap_keys().chain(registry.article_keys()) {
        if !allowed.contains(&key.lang) {
          problems.push(format!("{key}: language \"{}\" is not configured", key.lang));
        }
      }
    }

    for (key, roadmap) in &registry.roadmaps {
      for url in roadmap.links() {
        if let Some(link) = RecordLink::parse(url)
          && !registry.contains(&link)
        {
          problems.push(format!("roadmap {key}: {} link {url} does not resolve", link.kind.as_str()));
        }
      }
    }

    if !problems.is_empty() {
      return Err(ContentError::Validation(problems));
    }
    tracing::debug!(
      roadmaps = registry.roadmap_count(),
      articles = registry.article_count(),
      "content registry built"
    );
    Ok(registry)
  }
}
