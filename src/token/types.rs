//! Token claim and configuration types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record count assumed when a token carries no `total_records` claim
pub const DEFAULT_TOTAL_RECORDS: u64 = 100;

/// Delay in seconds assumed when a token carries no `response_delay` claim
pub const DEFAULT_RESPONSE_DELAY: f64 = 0.01;

/// Subject written into every minted token
pub const TOKEN_SUBJECT: &str = "mock-api-client";

/// Raw JWT claims as they appear on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Token subject
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Number of records the API should pretend to hold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_records: Option<u64>,
    /// Simulated latency in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_delay: Option<f64>,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

/// Per-client configuration recovered from a verified token
#[derive(Debug, Clone, PartialEq)]
pub struct MockConfig {
    /// Number of records the API should pretend to hold
    pub total_records: u64,
    /// Simulated latency in seconds (finite, non-negative)
    pub response_delay: f64,
    /// When the token was issued
    pub issued_at: DateTime<Utc>,
    /// When the token stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl MockConfig {
    /// The simulated latency as a `Duration`
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.response_delay).unwrap_or_default()
    }
}

/// Check that a delay can be slept on
pub(crate) fn is_valid_delay(seconds: f64) -> bool {
    seconds.is_finite() && Duration::try_from_secs_f64(seconds).is_ok()
}
