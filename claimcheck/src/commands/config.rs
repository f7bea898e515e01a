//! The `config` command: prints the effective configuration as YAML.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use claimcheck_core::ClaimCheckConfig;

pub fn run_config<W: Write>(config_path: Option<&Path>, writer: &mut W) -> Result<()> {
    let config = ClaimCheckConfig::resolve(config_path)?;
    debug!("Rendering effective configuration.");
    let yaml = serde_yml::to_string(&config).context("Failed to serialize configuration")?;
    write!(writer, "{}", yaml)?;
    Ok(())
}
