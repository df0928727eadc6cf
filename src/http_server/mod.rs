//! # HTTP Server Module
//!
//! Axum-based HTTP surface for the string store: route modules, server
//! configuration, and the API error taxonomy.
//!
//! # Endpoints
//!
//! - `POST /strings` - Analyze and store a string
//! - `GET /strings/{string_value}` - Fetch an analyzed string
//! - `GET /strings` - List strings with structured filters
//! - `GET /strings/filter-by-natural-language` - Natural-language filtering
//! - `DELETE /strings/{string_value}` - Delete a string
//! - `GET /health` - Health check
//! - `GET /` - Service directory

pub mod config;
pub mod errors;
pub mod meta_routes;
pub mod server;
pub mod string_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
pub use string_routes::AppState;
