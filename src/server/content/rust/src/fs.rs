/* src/server/content/rust/src/fs.rs */

use std::path::{Path, PathBuf};

use crate::errors::ContentError;
use crate::key::ContentKey;
use crate::parse::{
  ARTICLE_EXT, ARTICLES_DIR, ROADMAP_EXT, ROADMAPS_DIR, parse_article, parse_roadmap,
};
use crate::registry::{ContentRegistry, RegistryBuilder};
use crate::slug::derive_slug;

/// Sorted entries of `dir`, so load order and error order are stable.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, ContentError> {
  let mut entries = Vec::new();
  for entry in std::fs::read_dir(dir).map_err(|e| ContentError::io(dir, e))? {
    let entry = entry.map_err(|e| ContentError::io(dir, e))?;
    entries.push(entry.path());
  }
  entries.sort();
  Ok(entries)
}

fn file_key(lang: &str, path: &Path) -> Result<ContentKey, ContentError> {
  let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
  ContentKey::new(lang, stem).map_err(|e| ContentError::parse(path, e))
}

fn has_ext(path: &Path, ext: &str) -> bool {
  path.is_file() && path.extension().is_some_and(|e| e == ext)
}

fn is_hidden(path: &Path) -> bool {
  path.file_name().is_some_and(|n| n.to_string_lossy().starts_with('.'))
}

fn load_language(
  root: &Path,
  lang_dir: &Path,
  lang: &str,
  builder: &mut RegistryBuilder,
) -> Result<(), ContentError> {
  let roadmaps = lang_dir.join(ROADMAPS_DIR);
  if roadmaps.is_dir() {
    for path in sorted_entries(&roadmaps)? {
      if !has_ext(&path, ROADMAP_EXT) {
        continue;
      }
      let key = file_key(lang, &path)?;
      let text = std::fs::read_to_string(&path).map_err(|e| ContentError::io(&path, e))?;
      let roadmap = parse_roadmap(&path, &text, derive_slug(root, &path)?)?;
      tracing::debug!(%key, path = %path.display(), "roadmap loaded");
      builder.insert_roadmap(key, roadmap)?;
    }
  }

  let articles = lang_dir.join(ARTICLES_DIR);
  if articles.is_dir() {
    for path in sorted_entries(&articles)? {
      if !has_ext(&path, ARTICLE_EXT) {
        continue;
      }
      let key = file_key(lang, &path)?;
      let text = std::fs::read_to_string(&path).map_err(|e| ContentError::io(&path, e))?;
      let article = parse_article(&path, &text, derive_slug(root, &path)?)?;
      tracing::debug!(%key, path = %path.display(), "article loaded");
      builder.insert_article(key, article)?;
    }
  }
  Ok(())
}

/// Load `<root>/<lang>/{roadmaps,articles}/*` into a validated registry.
/// `languages` restricts which language directories may exist; empty allows any.
pub fn load_directory(root: &Path, languages: &[String]) -> Result<ContentRegistry, ContentError> {
  let mut builder = ContentRegistry::builder().languages(languages);

  for lang_dir in sorted_entries(root)? {
    if !lang_dir.is_dir() || is_hidden(&lang_dir) {
      continue;
    }
    let lang = lang_dir.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    load_language(root, &lang_dir, &lang, &mut builder)?;
  }

  builder.build()
}
