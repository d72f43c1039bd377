/* src/server/content/rust/src/key.rs */

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::ContentError;

fn name_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("valid name regex"))
}

fn lang_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"^[a-z]{2,3}(?:-[a-z0-9]{2,8})?$").expect("valid lang regex"))
}

pub fn is_valid_name(name: &str) -> bool {
  name_re().is_match(name)
}

pub fn is_valid_lang(lang: &str) -> bool {
  lang_re().is_match(lang)
}

/// The (language, name) pair a route uses to address one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentKey {
  pub lang: String,
  pub name: String,
}

impl ContentKey {
  /// Build a key, rejecting identifiers that could not name a file in the content tree.
  pub fn new(lang: impl Into<String>, name: impl Into<String>) -> Result<Self, ContentError> {
    let lang = lang.into();
    let name = name.into();
    if !is_valid_lang(&lang) {
      return Err(ContentError::InvalidIdentifier(lang));
    }
    if !is_valid_name(&name) {
      return Err(ContentError::InvalidIdentifier(name));
    }
    Ok(Self { lang, name })
  }
}

impl fmt::Display for ContentKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.lang, self.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_plain_identifiers() {
    let key = ContentKey::new("en", "beginner-dapp-roadmap").unwrap();
    assert_eq!(key.to_string(), "en/beginner-dapp-roadmap");
  }

  #[test]
  fn accepts_region_language() {
    assert!(ContentKey::new("zh-cn", "intro").is_ok());
  }

  #[test]
  fn rejects_traversal_and_case() {
    for name in ["../secret", "Intro", "-lead", "a/b", ""] {
      assert!(ContentKey::new("en", name).is_err(), "{name} should be rejected");
    }
  }

  #[test]
  fn rejects_bad_language() {
    for lang in ["EN", "english", "e", "en_US"] {
      assert!(matches!(
        ContentKey::new(lang, "intro"),
        Err(ContentError::InvalidIdentifier(ref l)) if l == lang
      ));
    }
  }
}
