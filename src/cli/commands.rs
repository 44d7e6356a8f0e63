//! CLI commands and argument parsing

use crate::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::token::{DEFAULT_RESPONSE_DELAY, DEFAULT_TOTAL_RECORDS};
use crate::types::EntityKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mock data API server and key tooling
#[derive(Parser, Debug)]
#[command(name = "mock-data-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Server configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for JSON-producing commands
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Interface to bind (overrides config and MOCK_API_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and MOCK_API_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Mint a signed API key
    GenerateKey {
        /// Number of records the API should pretend to hold
        #[arg(default_value_t = DEFAULT_TOTAL_RECORDS)]
        total_records: u64,

        /// Simulated latency per response, in seconds
        #[arg(default_value_t = DEFAULT_RESPONSE_DELAY)]
        response_delay: f64,

        /// Days until the key expires (defaults to the configured lifetime)
        #[arg(long)]
        ttl_days: Option<i64>,
    },

    /// Decode an API key and show its configuration
    InspectKey {
        /// The key to inspect
        token: String,
    },

    /// Print a page of records without starting a server
    Preview {
        /// Entity kind to generate
        kind: EntityKind,

        /// Page number (1-based)
        #[arg(long, default_value_t = DEFAULT_PAGE as i64)]
        page: i64,

        /// Records per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE as i64)]
        page_size: i64,

        /// Size of the virtual collection
        #[arg(long, default_value_t = DEFAULT_TOTAL_RECORDS)]
        total_records: u64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}
