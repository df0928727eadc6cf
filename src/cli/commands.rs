//! CLI command implementations
//!
//! `serve` loads configuration, initializes tracing, and runs the HTTP
//! server on a tokio runtime. `analyze` is a one-shot: derive properties
//! for one string and print them as pretty JSON.

use std::fs;
use std::path::Path;

use crate::analyzer;
use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to a command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Analyze { value } => analyze(&value),
    }
}

/// Start the HTTP server
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    init_tracing();

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Analyze one string and print its properties
pub fn analyze(value: &str) -> CliResult<()> {
    if value.trim().is_empty() {
        return Err(CliError::input_error("String value cannot be empty"));
    }

    let properties = analyzer::analyze(value);
    let rendered = serde_json::to_string_pretty(&properties)
        .map_err(|e| CliError::input_error(format!("JSON encoding failed: {}", e)))?;
    println!("{}", rendered);

    Ok(())
}

/// Load configuration from an optional JSON file; absent file means defaults
fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|e| CliError::config_error(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&raw)
                .map_err(|e| CliError::config_error(format!("{}: {}", path.display(), e)))
        }
        None => Ok(HttpServerConfig::default()),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;

    #[test]
    fn test_load_config_without_file_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_load_config_missing_file_is_config_error() {
        let err = load_config(Some(Path::new("/nonexistent/stringdb.json"))).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_analyze_rejects_empty_input() {
        let err = analyze("   ").unwrap_err();
        assert!(err.message().contains("empty"));
    }
}
