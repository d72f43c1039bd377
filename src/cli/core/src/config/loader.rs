/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::WaypointConfig;

pub const CONFIG_FILE: &str = "waypoint.toml";

/// Walk from `start` up to the filesystem root looking for `waypoint.toml`.
pub fn find_waypoint_config(start: &Path) -> Result<PathBuf> {
  let mut dir = start;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    match dir.parent() {
      Some(parent) => dir = parent,
      None => bail!("no {CONFIG_FILE} found in {} or any parent directory", start.display()),
    }
  }
}

/// Read, parse and validate one config file. Relative paths are resolved
/// against the file's directory.
pub fn load_waypoint_config(path: &Path) -> Result<WaypointConfig> {
  let text =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let mut config: WaypointConfig =
    toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid config {}", path.display()))?;
  let base_dir = path.parent().unwrap_or(Path::new("."));
  config.resolve_paths(base_dir);
  Ok(config)
}

/// Load the explicit config path when given, otherwise discover one from the cwd.
pub fn resolve_config(explicit: Option<&Path>) -> Result<(WaypointConfig, PathBuf)> {
  let path = match explicit {
    Some(p) => p.to_path_buf(),
    None => {
      let cwd = std::env::current_dir().context("failed to read current directory")?;
      find_waypoint_config(&cwd)?
    }
  };
  let config = load_waypoint_config(&path)?;
  Ok((config, path))
}
