/* src/server/core/rust/src/errors.rs */

use std::fmt;

/// Closed set of failures a page can end in. Each kind owns its wire code
/// and HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// No record for the requested identifiers.
  NotFound,
  /// The internal API answered, but not with a success status.
  Upstream,
  Internal,
}

impl ErrorKind {
  pub fn code(self) -> &'static str {
    match self {
      Self::NotFound => "NOT_FOUND",
      Self::Upstream => "UPSTREAM_ERROR",
      Self::Internal => "INTERNAL_ERROR",
    }
  }

  pub fn status(self) -> u16 {
    match self {
      Self::NotFound => 404,
      Self::Upstream => 502,
      Self::Internal => 500,
    }
  }
}

/// Error surfaced to the page layer. Callers branch on `kind()`, clients see
/// `code()` and `message()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaypointError {
  kind: ErrorKind,
  message: String,
}

impl WaypointError {
  pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
    Self { kind, message: message.into() }
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::new(ErrorKind::NotFound, msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::new(ErrorKind::Internal, msg)
  }

  pub fn upstream(msg: impl Into<String>) -> Self {
    Self::new(ErrorKind::Upstream, msg)
  }

  pub fn kind(&self) -> ErrorKind {
    self.kind
  }

  pub fn code(&self) -> &'static str {
    self.kind.code()
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.kind.status()
  }

  pub fn is_not_found(&self) -> bool {
    self.kind == ErrorKind::NotFound
  }
}

impl fmt::Display for WaypointError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code(), self.message)
  }
}

impl std::error::Error for WaypointError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn kinds_map_to_code_and_status() {
    let table = [
      (ErrorKind::NotFound, "NOT_FOUND", 404),
      (ErrorKind::Upstream, "UPSTREAM_ERROR", 502),
      (ErrorKind::Internal, "INTERNAL_ERROR", 500),
    ];
    for (kind, code, status) in table {
      assert_eq!(kind.code(), code);
      assert_eq!(kind.status(), status);
    }
  }

  #[test]
  fn constructors_pick_kind() {
    assert_eq!(WaypointError::not_found("x").kind(), ErrorKind::NotFound);
    assert_eq!(WaypointError::internal("x").status(), 500);
    assert_eq!(WaypointError::upstream("API returned 503").code(), "UPSTREAM_ERROR");
    assert!(WaypointError::not_found("x").is_not_found());
    assert!(!WaypointError::internal("x").is_not_found());
  }

  #[test]
  fn display_prefixes_code() {
    assert_eq!(WaypointError::not_found("You missed it").to_string(), "NOT_FOUND: You missed it");
  }
}
