/* src/server/content/rust/src/registry/link.rs */

use std::fmt;

use crate::key::ContentKey;
use crate::parse::{ARTICLES_DIR, ROADMAPS_DIR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
  Roadmap,
  Article,
}

impl RecordKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Roadmap => "roadmap",
      Self::Article => "article",
    }
  }

  fn segment(self) -> &'static str {
    match self {
      Self::Roadmap => ROADMAPS_DIR,
      Self::Article => ARTICLES_DIR,
    }
  }
}

/// A site-internal url that addresses a record: `/{lang}/roadmaps/{name}`
/// or `/{lang}/articles/{name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLink {
  pub kind: RecordKind,
  pub key: ContentKey,
}

impl RecordLink {
  /// Returns `None` for external urls and for internal paths that are not record pages.
  pub fn parse(url: &str) -> Option<Self> {
    if !url.starts_with('/') || url.starts_with("//") {
      return None;
    }
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let mut segments = path.trim_matches('/').split('/');
    let (lang, kind, name) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
      return None;
    }
    let kind = match kind {
      ROADMAPS_DIR => RecordKind::Roadmap,
      ARTICLES_DIR => RecordKind::Article,
      _ => return None,
    };
    let key = ContentKey::new(lang, name).ok()?;
    Some(Self { kind, key })
  }
}

impl fmt::Display for RecordLink {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "/{}/{}/{}", self.key.lang, self.kind.segment(), self.key.name)
  }
}
