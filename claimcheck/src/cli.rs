// claimcheck/src/cli.rs
//! This file defines the command-line interface (CLI) for the claimcheck application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default number of sources shown in the report.
pub const DEFAULT_SOURCES: usize = 3;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "claimcheck",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check the credibility of a factual claim",
    long_about = "ClaimCheck searches the web for evidence about a claim, scores each source for authority, recency and relevance, asks an LLM for an independent judgment, and reconciles both into a credibility score, a verdict and a confidence level. Requires SERPAPI_API_KEY and GEMINI_API_KEY in the environment or a .env file.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, conflicts_with = "debug", help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `claimcheck` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verifies a single claim and prints the verdict.
    #[command(about = "Verify a claim (from the argument or stdin) and print the verdict.")]
    Verify(VerifyCommand),

    /// Lists example claims.
    #[command(about = "List example claims to try.")]
    Samples,

    /// Prints the effective configuration.
    #[command(about = "Print the effective configuration (built-in defaults merged with the user file) as YAML.")]
    Config(ConfigCommand),
}

/// Arguments for the `verify` command.
#[derive(Parser, Debug)]
pub struct VerifyCommand {
    /// The claim to verify (reads from stdin if not provided).
    #[arg(value_name = "CLAIM", help = "The claim to verify. Reads stdin when omitted.")]
    pub claim: Option<String>,

    /// Path to a configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a configuration file (YAML) overriding the built-in defaults.")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON instead of a report.
    #[arg(long, help = "Print the full result as JSON.")]
    pub json: bool,

    /// Number of sources shown in the report.
    #[arg(long, short = 'n', value_name = "N", default_value_t = DEFAULT_SOURCES, help = "Number of top sources to display.")]
    pub sources: usize,
}

/// Arguments for the `config` command.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Path to a configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a configuration file (YAML) overriding the built-in defaults.")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verify_defaults() {
        let cli = Cli::try_parse_from(["claimcheck", "verify", "The sky is green"]).unwrap();
        match cli.command {
            Commands::Verify(cmd) => {
                assert_eq!(cmd.claim.as_deref(), Some("The sky is green"));
                assert_eq!(cmd.sources, DEFAULT_SOURCES);
                assert!(!cmd.json);
                assert!(cmd.config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn quiet_and_debug_conflict() {
        assert!(Cli::try_parse_from(["claimcheck", "-q", "-d", "samples"]).is_err());
    }
}
