// claimcheck/src/lib.rs
//! # ClaimCheck CLI Application
//!
//! This crate provides the terminal interface for the ClaimCheck verification
//! engine in `claimcheck-core`: argument parsing, logging, themed report
//! rendering and JSON output.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
