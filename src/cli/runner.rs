//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::pagination::{fetch_page, PageRequest};
use crate::token::{MockConfig, TokenCodec};
use crate::types::{EntityKind, API_KEY_HEADER};
use chrono::Duration;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

const RULE_WIDTH: usize = 60;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Serve { host, port } => {
                let mut config = self.load_config()?;
                if let Some(host) = host {
                    config = config.with_host(host.clone());
                }
                if let Some(port) = port {
                    config = config.with_port(*port);
                }
                config.validate()?;
                crate::cli::serve(config).await
            }
            Commands::GenerateKey {
                total_records,
                response_delay,
                ttl_days,
            } => self.generate_key(*total_records, *response_delay, *ttl_days),
            Commands::InspectKey { token } => self.inspect_key(token),
            Commands::Preview {
                kind,
                page,
                page_size,
                total_records,
            } => self.preview(*kind, *page, *page_size, *total_records),
        }
    }

    /// Resolve server configuration from the optional file and environment
    fn load_config(&self) -> Result<ServerConfig> {
        ServerConfig::load(self.cli.config.as_deref())
    }

    /// Mint a key and print it with usage instructions
    fn generate_key(
        &self,
        total_records: u64,
        response_delay: f64,
        ttl_days: Option<i64>,
    ) -> Result<()> {
        let config = self.load_config()?;
        let ttl_days = ttl_days.unwrap_or(config.default_ttl_days);
        if ttl_days <= 0 {
            return Err(Error::invalid_config(
                "ttl_days",
                format!("must be positive, got {ttl_days}"),
            ));
        }
        let ttl = Duration::try_days(ttl_days)
            .ok_or_else(|| Error::invalid_config("ttl_days", "is too large"))?;

        let codec = TokenCodec::new(&config.jwt_secret);
        let token = codec.encode(total_records, response_delay, ttl)?;
        tracing::debug!(total_records, response_delay, ttl_days, "Minted API key");

        println!(
            "{}",
            key_report(&token, total_records, response_delay, ttl_days)
        );
        Ok(())
    }

    /// Decode a key and print its configuration
    fn inspect_key(&self, token: &str) -> Result<()> {
        let config = self.load_config()?;
        let codec = TokenCodec::new(&config.jwt_secret);
        let mock = codec.decode(token.trim()).inspect_err(|e| {
            if let Error::TokenInvalid { reason } = e {
                tracing::warn!("Key rejected: {reason}");
            }
        })?;
        self.output_message(&inspect_message(&mock));
        Ok(())
    }

    /// Print one page exactly as the server would return it
    fn preview(&self, kind: EntityKind, page: i64, page_size: i64, total_records: u64) -> Result<()> {
        let request = PageRequest::new(Some(page), Some(page_size))?;
        let response = fetch_page(kind, request, total_records);
        self.output_message(&serde_json::to_value(&response)?);
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Log filter from `RUST_LOG` directives, falling back to INFO (DEBUG when verbose)
pub fn log_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback.to_string()))
}

/// Human-readable report printed after minting a key
pub fn key_report(token: &str, total_records: u64, response_delay: f64, ttl_days: i64) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("{rule}\nGenerated API Key:\n{rule}\n{token}\n{rule}\n"));
    out.push_str("\nConfiguration:\n");
    out.push_str(&format!("  - Total Records: {total_records}\n"));
    out.push_str(&format!("  - Response Delay: {response_delay}s\n"));
    out.push_str(&format!("  - Expiry: {ttl_days} days from now\n"));
    out.push_str("\nUsage:\n");
    out.push_str("  Add this to your request headers:\n");
    out.push_str(&format!("  {API_KEY_HEADER}: {token}\n"));
    out.push_str(&rule);
    out.push('\n');
    out
}

/// JSON document describing a decoded key
pub fn inspect_message(config: &MockConfig) -> Value {
    json!({
        "type": "API_KEY",
        "total_records": config.total_records,
        "response_delay": config.response_delay,
        "issued_at": config.issued_at.to_rfc3339(),
        "expires_at": config.expires_at.to_rfc3339(),
    })
}
