//! CLI module
//!
//! Command-line interface for the mock data service.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP server
//! - `generate-key` - Mint a signed API key
//! - `inspect-key` - Decode a key and show its configuration
//! - `preview` - Print a page of records without a server

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{inspect_message, key_report, log_filter, Runner};
pub use server::{authenticate, parse_page_request, router, serve, service_description, ApiError};
