//! CLI argument definitions using clap
//!
//! Commands:
//! - stringdb serve [--config <path>] [--port <port>]
//! - stringdb analyze <value>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stringdb - An in-memory string analysis store with an HTTP API
#[derive(Parser, Debug)]
#[command(name = "stringdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Analyze a single string and print its properties as JSON
    Analyze {
        /// The string to analyze
        value: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
