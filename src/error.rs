//! Error types for the mock data API
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the mock data API
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Token Errors
    // ============================================================================
    #[error("API key has expired")]
    TokenExpired,

    #[error("Invalid API key")]
    TokenInvalid { reason: String },

    #[error("Missing API key header '{header}'")]
    MissingApiKey { header: String },

    #[error("Token encoding failed: {message}")]
    TokenEncoding { message: String },

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Invalid query parameter '{field}': {message}")]
    Validation { field: String, message: String },

    // ============================================================================
    // Server Errors
    // ============================================================================
    #[error("Server error: {message}")]
    Server { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid token error
    pub fn token_invalid(reason: impl Into<String>) -> Self {
        Self::TokenInvalid {
            reason: reason.into(),
        }
    }

    /// Create a token encoding error
    pub fn token_encoding(message: impl Into<String>) -> Self {
        Self::TokenEncoding {
            message: message.into(),
        }
    }

    /// Create a query validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Check if this error means the caller is not authenticated
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Error::TokenExpired | Error::TokenInvalid { .. } | Error::MissingApiKey { .. }
        )
    }

    /// HTTP status code this error maps to when surfaced by the server
    pub fn status_code(&self) -> u16 {
        match self {
            e if e.is_auth_failure() => 401,
            Error::Validation { .. } => 422,
            _ => 500,
        }
    }
}

/// Result type alias for the mock data API
pub type Result<T> = std::result::Result<T, Error>;
