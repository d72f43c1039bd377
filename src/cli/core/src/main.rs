/* src/cli/core/src/main.rs */

mod check;
mod config;
mod logging;
mod routes;
mod serve;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{WaypointConfig, resolve_config};
use crate::serve::{Overrides, apply_overrides};

#[derive(Parser)]
#[command(name = "waypoint", version, about = "Serve and check Waypoint learning content")]
struct Cli {
  /// Path to waypoint.toml (discovered from the current directory when omitted)
  #[arg(long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Run the site
  Serve {
    #[arg(long, env = "PORT")]
    port: Option<u16>,
    /// Content root, overriding content.dir
    #[arg(long)]
    content_dir: Option<PathBuf>,
    /// Re-read content files on every request
    #[arg(long)]
    live: bool,
  },
  /// Load and validate the content tree
  Check {
    #[arg(long)]
    content_dir: Option<PathBuf>,
  },
  /// Print the registered page routes
  Routes,
}

fn load(cli_config: Option<&PathBuf>, overrides: &Overrides<'_>) -> Result<WaypointConfig> {
  let (mut config, path) = resolve_config(cli_config.map(PathBuf::as_path))?;
  apply_overrides(&mut config, overrides);
  logging::init_logging(&config.log.filter, config.log.format)?;
  tracing::debug!(config = %path.display(), "config loaded");
  Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Serve { port, content_dir, live } => {
      let overrides = Overrides { port, content_dir: content_dir.as_deref(), live };
      let config = load(cli.config.as_ref(), &overrides)?;
      serve::run_serve(&config).await?;
    }
    Command::Check { content_dir } => {
      let overrides = Overrides { content_dir: content_dir.as_deref(), ..Overrides::default() };
      let config = load(cli.config.as_ref(), &overrides)?;
      check::run_check(&config)?;
    }
    Command::Routes => {
      let config = load(cli.config.as_ref(), &Overrides::default())?;
      let server = serve::build_server(&config)?;
      routes::print_routes(&server);
    }
  }
  Ok(())
}
