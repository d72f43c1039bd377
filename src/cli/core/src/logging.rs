/* src/cli/core/src/logging.rs */

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogFormat;

/// `RUST_LOG` wins over the configured filter.
pub fn build_filter(configured: &str) -> Result<EnvFilter> {
  let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
  select_filter(env.as_deref(), configured)
}

/// An unparsable env value falls back to the configured filter, which must parse.
fn select_filter(env: Option<&str>, configured: &str) -> Result<EnvFilter> {
  if let Some(filter) = env.and_then(|directives| EnvFilter::try_new(directives).ok()) {
    return Ok(filter);
  }
  EnvFilter::try_new(configured).with_context(|| format!("invalid log filter \"{configured}\""))
}

pub fn init_logging(filter: &str, format: LogFormat) -> Result<()> {
  let filter = build_filter(filter)?;
  let registry = tracing_subscriber::registry().with(filter);
  match format {
    LogFormat::Compact => registry.with(fmt::layer().with_target(false).compact()).try_init(),
    LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
  }
  .context("failed to install log subscriber")
}
