//! The `verify` command: runs one verification and renders the result.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};

use claimcheck_core::{build_verifier, ClaimCheckConfig, Credentials, VerificationResult};

use crate::ui::output_format::info_msg;
use crate::ui::report;
use crate::ui::theme::ThemeMap;

/// Options for a single `verify` run.
pub struct VerifyOptions {
    pub claim: String,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub sources: usize,
    pub quiet: bool,
}

/// Returns the claim argument, or stdin when no argument was given and stdin
/// is not a terminal. Only the final line terminator of stdin is dropped.
pub fn read_claim(arg: Option<String>) -> Result<String> {
    if let Some(claim) = arg {
        return Ok(claim);
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        debug!("No claim argument and stdin is a terminal.");
        return Ok(String::new());
    }
    info!("Reading claim from stdin...");
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer).context("Failed to read claim from stdin")?;
    Ok(strip_line_ending(buffer))
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Verifies the claim as given. A blank claim short-circuits before
/// configuration or credentials are touched.
pub fn verify_claim(opts: &VerifyOptions, theme_map: &ThemeMap) -> Result<VerificationResult> {
    if opts.claim.trim().is_empty() {
        return Ok(VerificationResult::empty_input());
    }

    let config = ClaimCheckConfig::resolve(opts.config.as_deref())?;
    let credentials = Credentials::from_env()
        .context("Provider credentials are required (set them in the environment or a .env file)")?;
    let verifier = build_verifier(&config, &credentials)?;

    if !opts.quiet && !opts.json {
        info_msg("Searching for evidence and consulting the model...", theme_map);
    }
    Ok(verifier.verify(&opts.claim))
}

/// Verifies and renders to stdout. Returns the result so the caller can pick
/// the exit code.
pub fn run_verify(opts: VerifyOptions, theme_map: &ThemeMap) -> Result<VerificationResult> {
    let result = verify_claim(&opts, theme_map)?;

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();

    if opts.json {
        report::print_json(&mut writer, &result)?;
    } else {
        report::print_report(&mut writer, &result, opts.sources, theme_map, supports_color)?;
    }
    writer.flush()?;
    Ok(result)
}
