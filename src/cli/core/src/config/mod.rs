/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;


pub use loader::{CONFIG_FILE, find_waypoint_config, load_waypoint_config, resolve_config};
pub use types::{ContentMode, LogFormat, WaypointConfig};
