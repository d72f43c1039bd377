/* src/cli/core/src/check.rs */

// `waypoint check`: load the whole content tree the way `serve` does in
// memory mode and report what it holds.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use waypoint_content::{ContentRegistry, load_directory};

use crate::config::WaypointConfig;
use crate::ui::{self, DIM, RESET};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LanguageCounts {
  pub roadmaps: usize,
  pub articles: usize,
}

pub fn count_by_language(registry: &ContentRegistry) -> BTreeMap<String, LanguageCounts> {
  let mut counts: BTreeMap<String, LanguageCounts> = BTreeMap::new();
  for key in registry.roadmap_keys() {
    counts.entry(key.lang.clone()).or_default().roadmaps += 1;
  }
  for key in registry.article_keys() {
    counts.entry(key.lang.clone()).or_default().articles += 1;
  }
  counts
}

/// Fails with every validation problem when the tree is inconsistent.
pub fn run_check(config: &WaypointConfig) -> Result<ContentRegistry> {
  let dir = &config.content.dir;
  ui::arrow(&format!("checking {}", dir.display()));

  let registry = load_directory(dir, &config.site.languages)
    .with_context(|| format!("content check failed for {}", dir.display()))?;

  for (lang, counts) in count_by_language(&registry) {
    ui::detail(&format!(
      "{lang}: {} roadmaps, {} articles {DIM}{}{RESET}",
      counts.roadmaps,
      counts.articles,
      if lang == config.site.default_language { "(default)" } else { "" }
    ));
  }
  for lang in &config.site.languages {
    if !registry.languages().contains(lang.as_str()) {
      ui::warn(&format!("language \"{lang}\" has no content"));
    }
  }

  ui::ok(&format!(
    "{} roadmaps, {} articles",
    registry.roadmap_count(),
    registry.article_count()
  ));
  Ok(registry)
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  fn config_for(root: &Path) -> WaypointConfig {
    let path = root.join("waypoint.toml");
    std::fs::write(&path, "[site]\nname = \"W\"\nlanguages = [\"en\", \"zh\"]\n").unwrap();
    crate::config::load_waypoint_config(&path).unwrap()
  }

  fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, text).unwrap();
  }

  const ARTICLE: &str =
    "+++\ntitle = \"A\"\n[metadata]\nexpertise = \"beginner\"\nduration = \"1h\"\n+++\nbody\n";

  #[test]
  fn counts_records_per_language() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "content/en/articles/a.md", ARTICLE);
    write(tmp.path(), "content/en/articles/b.md", ARTICLE);
    write(tmp.path(), "content/zh/articles/a.md", ARTICLE);

    let registry = run_check(&config_for(tmp.path())).unwrap();
    let counts = count_by_language(&registry);
    assert_eq!(counts["en"], LanguageCounts { roadmaps: 0, articles: 2 });
    assert_eq!(counts["zh"], LanguageCounts { roadmaps: 0, articles: 1 });
  }

  #[test]
  fn reports_broken_links() {
    let tmp = tempfile::tempdir().unwrap();
    write(
      tmp.path(),
      "content/en/roadmaps/r.toml",
      r#"
title = "R"
contentType = "roadmap"
excerpt = "x"

[metadata]
expertise = "beginner"
duration = "1w"

[[chapters]]
title = "Missing"
excerpt = "x"
url = "/en/articles/missing"
"#,
    );
    let err = run_check(&config_for(tmp.path())).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("content check failed"));
    assert!(msg.contains("/en/articles/missing does not resolve"));
  }
}
