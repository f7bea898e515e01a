//! Logger setup for the `claimcheck` binary.
//!
//! Log lines go to stderr as `[LEVEL target] message` so they never mix with
//! the report or JSON written to stdout.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// An explicit `level` (from `-q`/`-d`) wins over `RUST_LOG`; without one the
/// environment decides and falls back to `warn`. Safe to call more than once.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()));
    let _ = builder.try_init();
}
