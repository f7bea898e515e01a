// claimcheck/src/main.rs
//! ClaimCheck entry point.
//!
//! Parses arguments, initializes logging and dispatches to a command. Exits
//! with status 1 on a command error or when verification ends in an `Error`
//! verdict.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};

use claimcheck::cli::{Cli, Commands};
use claimcheck::commands::{config::run_config, samples::run_samples, verify};
use claimcheck::logger;
use claimcheck::ui::output_format::error_msg;
use claimcheck::ui::theme::{build_theme_map, ThemeStyle};
use claimcheck_core::Verdict;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    info!("claimcheck started. Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let theme_map = build_theme_map(cli.theme.as_ref()).context("Theme error")?;

    match cli.command {
        Commands::Verify(cmd) => {
            let opts = verify::VerifyOptions {
                claim: verify::read_claim(cmd.claim)?,
                config: cmd.config,
                json: cmd.json,
                sources: cmd.sources,
                quiet: cli.quiet,
            };
            let result = verify::run_verify(opts, &theme_map)?;
            if result.verdict == Verdict::Error {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Samples => run_samples(&mut io::stdout().lock())?,
        Commands::Config(cmd) => run_config(cmd.config.as_deref(), &mut io::stdout().lock())?,
    }

    Ok(ExitCode::SUCCESS)
}
