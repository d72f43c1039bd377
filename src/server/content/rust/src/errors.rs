/* src/server/content/rust/src/errors.rs */

use std::path::PathBuf;

use thiserror::Error;

use crate::key::ContentKey;

/// Message carried by every not-found lookup.
pub const NOT_FOUND_MESSAGE: &str = "You missed it";

/// Failure to load or validate the content tree.
#[derive(Debug, Error)]
pub enum ContentError {
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse {}: {message}", .path.display())]
  Parse { path: PathBuf, message: String },

  #[error("{} is outside the content root {}", .path.display(), .root.display())]
  OutsideRoot { path: PathBuf, root: PathBuf },

  #[error("invalid content identifier {0:?}")]
  InvalidIdentifier(String),

  #[error("duplicate {kind} record {key}")]
  Duplicate { kind: &'static str, key: ContentKey },

  #[error("content validation failed:\n  {}", .0.join("\n  "))]
  Validation(Vec<String>),
}

impl ContentError {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io { path: path.into(), source }
  }

  pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
    Self::Parse { path: path.into(), message: message.to_string() }
  }
}

/// Outcome of a failed lookup. Callers branch on the variant, not the text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  #[error("You missed it")]
  NotFound,

  /// The store could not answer. The detail is for logs only.
  #[error("content store failure: {0}")]
  Internal(String),
}

impl From<ContentError> for ResolveError {
  fn from(err: ContentError) -> Self {
    match err {
      ContentError::InvalidIdentifier(_) => Self::NotFound,
      ContentError::Io { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
        Self::NotFound
      }
      other => Self::Internal(other.to_string()),
    }
  }
}
