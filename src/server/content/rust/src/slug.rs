/* src/server/content/rust/src/slug.rs */

use std::path::{Component, Path};

use crate::errors::ContentError;

/// Derive a record's slug from where its file sits under the content root.
///
/// `content/en/roadmaps/Beginner-Dapp.toml` under `content` becomes
/// `en/roadmaps/beginner-dapp`.
pub fn derive_slug(root: &Path, file: &Path) -> Result<String, ContentError> {
  let rel = file.strip_prefix(root).map_err(|_| ContentError::OutsideRoot {
    path: file.to_path_buf(),
    root: root.to_path_buf(),
  })?;
  let rel = rel.with_extension("");

  let mut parts = Vec::new();
  for component in rel.components() {
    match component {
      Component::Normal(part) => parts.push(part.to_string_lossy().to_lowercase()),
      Component::CurDir => {}
      _ => {
        return Err(ContentError::OutsideRoot {
          path: file.to_path_buf(),
          root: root.to_path_buf(),
        });
      }
    }
  }
  Ok(parts.join("/"))
}
