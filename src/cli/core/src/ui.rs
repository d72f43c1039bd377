/* src/cli/core/src/ui.rs */

// Terminal output for human-facing command results. Diagnostics go through tracing.
#![allow(clippy::print_stdout, clippy::print_stderr)]

pub(crate) const RESET: &str = "\x1b[0m";
pub(crate) const DIM: &str = "\x1b[2m";
pub(crate) const GREEN: &str = "\x1b[32m";
pub(crate) const YELLOW: &str = "\x1b[33m";
pub(crate) const CYAN: &str = "\x1b[36m";

pub(crate) fn arrow(msg: &str) {
  println!("{CYAN}>{RESET} {msg}");
}

pub(crate) fn ok(msg: &str) {
  println!("{GREEN}ok{RESET} {msg}");
}

pub(crate) fn detail(msg: &str) {
  println!("  {msg}");
}

pub(crate) fn warn(msg: &str) {
  eprintln!("{YELLOW}warn{RESET} {msg}");
}
