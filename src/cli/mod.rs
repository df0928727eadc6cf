//! CLI module for stringdb
//!
//! Provides the command-line interface:
//! - serve: load config and boot the HTTP server
//! - analyze: one-shot property derivation for a single string

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{analyze, run, serve};
pub use errors::{CliError, CliResult};
