/* src/server/content/rust/src/parse.rs */

use std::path::{Path, PathBuf};

use crate::errors::ContentError;
use crate::key::ContentKey;
use crate::markdown::{render_markdown, split_front_matter};
use crate::model::{Article, ArticleFrontMatter, RoadmapOverview};

pub const ROADMAPS_DIR: &str = "roadmaps";
pub const ARTICLES_DIR: &str = "articles";
pub const ROADMAP_EXT: &str = "toml";
pub const ARTICLE_EXT: &str = "md";

pub fn roadmap_path(root: &Path, key: &ContentKey) -> PathBuf {
  root.join(&key.lang).join(ROADMAPS_DIR).join(format!("{}.{ROADMAP_EXT}", key.name))
}

pub fn article_path(root: &Path, key: &ContentKey) -> PathBuf {
  root.join(&key.lang).join(ARTICLES_DIR).join(format!("{}.{ARTICLE_EXT}", key.name))
}

/// Parse a TOML roadmap record. `path` is only used for error messages.
pub fn parse_roadmap(
  path: &Path,
  text: &str,
  slug: String,
) -> Result<RoadmapOverview, ContentError> {
  let mut roadmap: RoadmapOverview =
    toml::from_str(text).map_err(|e| ContentError::parse(path, e))?;
  roadmap.slug = slug;
  Ok(roadmap)
}

/// Parse a markdown article with `+++` TOML front matter, rendering its body to HTML.
pub fn parse_article(path: &Path, text: &str, slug: String) -> Result<Article, ContentError> {
  let (front, body) =
    split_front_matter(text).ok_or_else(|| ContentError::parse(path, "missing +++ front matter"))?;
  let meta: ArticleFrontMatter = toml::from_str(front).map_err(|e| ContentError::parse(path, e))?;
  Ok(Article {
    title: meta.title,
    content_type: meta.content_type,
    slug,
    excerpt: meta.excerpt,
    metadata: meta.metadata,
    body: render_markdown(body),
  })
}
