/* src/server/content/rust/src/taxonomy.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a piece of learning content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
  Roadmap,
  Course,
  Article,
  Tutorial,
  Video,
}

impl ContentType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Roadmap => "roadmap",
      Self::Course => "course",
      Self::Article => "article",
      Self::Tutorial => "tutorial",
      Self::Video => "video",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Expertise {
  Beginner,
  Intermediate,
  Advanced,
}

impl Expertise {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Beginner => "beginner",
      Self::Intermediate => "intermediate",
      Self::Advanced => "advanced",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
  SmartContracts,
  Dapp,
  Tooling,
  Testing,
  Security,
  Frontend,
  Blockchain,
  Rust,
}

impl Subject {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::SmartContracts => "smart-contracts",
      Self::Dapp => "dapp",
      Self::Tooling => "tooling",
      Self::Testing => "testing",
      Self::Security => "security",
      Self::Frontend => "frontend",
      Self::Blockchain => "blockchain",
      Self::Rust => "rust",
    }
  }
}

macro_rules! impl_display_as_str {
  ($($ty:ty),*) => {
    $(
      impl fmt::Display for $ty {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
          f.write_str(self.as_str())
        }
      }
    )*
  };
}

impl_display_as_str!(ContentType, Expertise, Subject);
