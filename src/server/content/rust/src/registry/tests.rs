/* src/server/content/rust/src/registry/tests.rs */

use super::*;
use crate::errors::ContentError;
use crate::model::{ChapterExcerpt, CourseSummary, Metadata};
use crate::taxonomy::{ContentType, Expertise, Subject};

fn roadmap(title: &str, urls: &[&str]) -> RoadmapOverview {
  RoadmapOverview {
    title: title.to_string(),
    content_type: ContentType::Roadmap,
    slug: String::new(),
    excerpt: String::new(),
    metadata: Metadata {
      expertise: Expertise::Beginner,
      duration: "1 week".into(),
      prerequisites: vec![],
      subjects: vec![Subject::Dapp],
    },
    contents: urls
      .iter()
      .map(|url| CourseSummary {
        title: "Course".into(),
        excerpt: String::new(),
        content_type: ContentType::Course,
        duration: "1 hour".into(),
        subjects: vec![],
        url: (*url).to_string(),
      })
      .collect(),
    chapters: vec![],
  }
}

fn article(title: &str) -> Article {
  Article {
    title: title.to_string(),
    content_type: ContentType::Article,
    slug: String::new(),
    excerpt: String::new(),
    metadata: Metadata {
      expertise: Expertise::Beginner,
      duration: "5 min".into(),
      prerequisites: vec![],
      subjects: vec![],
    },
    body: "<p>hi</p>\n".into(),
  }
}

fn key(lang: &str, name: &str) -> ContentKey {
  ContentKey::new(lang, name).unwrap()
}

#[test]
fn resolves_registered_roadmap() {
  let expected = roadmap("Beginner Dapp Roadmap", &[]);
  let mut builder = ContentRegistry::builder();
  builder.insert_roadmap(key("en", "beginner-dapp-roadmap"), expected.clone()).unwrap();
  let registry = builder.build().unwrap();

  let found = registry.roadmap("en", "beginner-dapp-roadmap").unwrap();
  assert_eq!(*found, expected);
  assert_eq!(found.title, "Beginner Dapp Roadmap");
}

#[test]
fn unknown_pair_is_not_found() {
  let mut builder = ContentRegistry::builder();
  builder.insert_roadmap(key("en", "beginner-dapp-roadmap"), roadmap("A", &[])).unwrap();
  let registry = builder.build().unwrap();

  let err = registry.roadmap("en", "nonexistent-roadmap").unwrap_err();
  assert_eq!(err, ResolveError::NotFound);
  assert_eq!(err.to_string(), "You missed it");
  // Same name, other language.
  assert_eq!(registry.roadmap("zh", "beginner-dapp-roadmap").unwrap_err(), ResolveError::NotFound);
  // Roadmaps and articles are separate namespaces.
  assert_eq!(registry.article("en", "beginner-dapp-roadmap").unwrap_err(), ResolveError::NotFound);
}

#[test]
fn malformed_identifier_is_not_found() {
  let registry = ContentRegistry::builder().build().unwrap();
  assert_eq!(registry.roadmap("../..", "etc/passwd").unwrap_err(), ResolveError::NotFound);
  assert_eq!(registry.roadmap("", "").unwrap_err(), ResolveError::NotFound);
}

#[test]
fn duplicate_insert_rejected() {
  let mut builder = ContentRegistry::builder();
  builder.insert_roadmap(key("en", "a"), roadmap("A", &[])).unwrap();
  let err = builder.insert_roadmap(key("en", "a"), roadmap("B", &[])).unwrap_err();
  assert!(matches!(err, ContentError::Duplicate { kind: "roadmap", .. }));
  assert_eq!(err.to_string(), "duplicate roadmap record en/a");
}

#[test]
fn same_name_across_kinds_allowed() {
  let mut builder = ContentRegistry::builder();
  builder.insert_roadmap(key("en", "intro"), roadmap("Intro", &[])).unwrap();
  builder.insert_article(key("en", "intro"), article("Intro")).unwrap();
  let registry = builder.build().unwrap();
  assert_eq!(registry.roadmap_count(), 1);
  assert_eq!(registry.article_count(), 1);
}

#[test]
fn resolving_links_pass_validation() {
  let mut builder = ContentRegistry::builder();
  builder
    .insert_roadmap(
      key("en", "path"),
      roadmap("Path", &["/en/articles/first", "/en/roadmaps/next", "https://example.org", "/catalog"]),
    )
    .unwrap();
  builder.insert_roadmap(key("en", "next"), roadmap("Next", &[])).unwrap();
  builder.insert_article(key("en", "first"), article("First")).unwrap();
  assert!(builder.build().is_ok());
}

#[test]
fn dangling_links_reported_together() {
  let mut builder = ContentRegistry::builder();
  let mut path = roadmap("Path", &["/en/articles/missing"]);
  path.chapters.push(ChapterExcerpt {
    title: "Next".into(),
    excerpt: String::new(),
    url: Some("/en/roadmaps/gone".into()),
  });
  builder.insert_roadmap(key("en", "path"), path).unwrap();

  let Err(ContentError::Validation(problems)) = builder.build() else {
    panic!("expected validation failure");
  };
  assert_eq!(
    problems,
    vec![
      "roadmap en/path: article link /en/articles/missing does not resolve".to_string(),
      "roadmap en/path: roadmap link /en/roadmaps/gone does not resolve".to_string(),
    ]
  );
}

#[test]
fn unconfigured_language_rejected() {
  let mut builder = ContentRegistry::builder().languages(["en"]);
  builder.insert_roadmap(key("en", "a"), roadmap("A", &[])).unwrap();
  builder.insert_article(key("fr", "b"), article("B")).unwrap();

  let Err(ContentError::Validation(problems)) = builder.build() else {
    panic!("expected validation failure");
  };
  assert_eq!(problems, vec!["fr/b: language \"fr\" is not configured".to_string()]);
}

#[test]
fn empty_language_list_accepts_any() {
  let mut builder = ContentRegistry::builder().languages(Vec::<String>::new());
  builder.insert_roadmap(key("ja", "a"), roadmap("A", &[])).unwrap();
  let registry = builder.build().unwrap();
  assert_eq!(registry.languages().into_iter().collect::<Vec<_>>(), vec!["ja"]);
}
