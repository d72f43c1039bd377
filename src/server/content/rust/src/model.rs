/* src/server/content/rust/src/model.rs */

use serde::{Deserialize, Serialize};

use crate::taxonomy::{ContentType, Expertise, Subject};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
  pub expertise: Expertise,
  pub duration: String,
  #[serde(default)]
  pub prerequisites: Vec<String>,
  #[serde(default)]
  pub subjects: Vec<Subject>,
}

/// A course referenced from a roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
  pub title: String,
  pub excerpt: String,
  pub content_type: ContentType,
  pub duration: String,
  #[serde(default)]
  pub subjects: Vec<Subject>,
  pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterExcerpt {
  pub title: String,
  pub excerpt: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
}

/// A themed learning path: metadata, linked courses and chapter excerpts.
///
/// `slug` is never authored. It is filled from the record's location on disk
/// when the record is loaded, see [`crate::derive_slug`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapOverview {
  pub title: String,
  pub content_type: ContentType,
  #[serde(skip_deserializing)]
  pub slug: String,
  pub excerpt: String,
  pub metadata: Metadata,
  #[serde(default)]
  pub contents: Vec<CourseSummary>,
  #[serde(default)]
  pub chapters: Vec<ChapterExcerpt>,
}

impl RoadmapOverview {
  /// Every url the roadmap links to, in document order.
  pub fn links(&self) -> impl Iterator<Item = &str> {
    self
      .contents
      .iter()
      .map(|c| c.url.as_str())
      .chain(self.chapters.iter().filter_map(|c| c.url.as_deref()))
  }
}

/// Front matter of a markdown article.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArticleFrontMatter {
  pub(crate) title: String,
  #[serde(default = "default_article_type")]
  pub(crate) content_type: ContentType,
  #[serde(default)]
  pub(crate) excerpt: String,
  pub(crate) metadata: Metadata,
}

fn default_article_type() -> ContentType {
  ContentType::Article
}

/// A tutorial article. `body` holds HTML rendered from the markdown source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub title: String,
  pub content_type: ContentType,
  pub slug: String,
  pub excerpt: String,
  pub metadata: Metadata,
  pub body: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn overview() -> RoadmapOverview {
    RoadmapOverview {
      title: "Beginner Dapp Roadmap".into(),
      content_type: ContentType::Roadmap,
      slug: "en/roadmaps/beginner-dapp-roadmap".into(),
      excerpt: "Start here".into(),
      metadata: Metadata {
        expertise: Expertise::Beginner,
        duration: "4 weeks".into(),
        prerequisites: vec!["Basic Rust".into()],
        subjects: vec![Subject::Dapp],
      },
      contents: vec![CourseSummary {
        title: "Hello Contract".into(),
        excerpt: "Your first contract".into(),
        content_type: ContentType::Course,
        duration: "1 hour".into(),
        subjects: vec![Subject::SmartContracts],
        url: "/en/articles/hello-contract".into(),
      }],
      chapters: vec![
        ChapterExcerpt { title: "Setup".into(), excerpt: "Install tools".into(), url: None },
        ChapterExcerpt {
          title: "Deploy".into(),
          excerpt: "Ship it".into(),
          url: Some("https://example.org/deploy".into()),
        },
      ],
    }
  }

  #[test]
  fn serializes_camel_case_keys() {
    let json = serde_json::to_value(overview()).unwrap();
    assert_eq!(json["contentType"], "roadmap");
    assert_eq!(json["contents"][0]["contentType"], "course");
    assert_eq!(json["metadata"]["subjects"][0], "dapp");
    assert!(json["chapters"][0].get("url").is_none());
  }

  #[test]
  fn slug_is_not_authored() {
    let doc = serde_json::json!({
      "title": "T",
      "contentType": "roadmap",
      "slug": "hand-written",
      "excerpt": "",
      "metadata": { "expertise": "advanced", "duration": "1 day" }
    });
    let parsed: RoadmapOverview = serde_json::from_value(doc).unwrap();
    assert_eq!(parsed.slug, "");
    assert!(parsed.contents.is_empty());
  }

  #[test]
  fn links_cover_contents_and_chapters() {
    let roadmap = overview();
    let links: Vec<&str> = roadmap.links().collect();
    assert_eq!(links, vec!["/en/articles/hello-contract", "https://example.org/deploy"]);
  }
}
