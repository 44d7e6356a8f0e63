//! Token codec implementation
//!
//! Mints and verifies HS256 tokens with a shared secret.

use super::types::{
    is_valid_delay, MockConfig, TokenClaims, DEFAULT_RESPONSE_DELAY, DEFAULT_TOTAL_RECORDS,
    TOKEN_SUBJECT,
};
use crate::error::{Error, Result};
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

/// Encodes and decodes configuration tokens
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec for the given shared secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against an injectable clock in `decode_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Mint a token valid for `ttl` from now
    pub fn encode(&self, total_records: u64, response_delay: f64, ttl: Duration) -> Result<String> {
        self.encode_at(total_records, response_delay, ttl, Utc::now())
    }

    /// Mint a token as if the current time were `now`
    pub fn encode_at(
        &self,
        total_records: u64,
        response_delay: f64,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String> {
        if ttl <= Duration::zero() {
            return Err(Error::token_encoding("token lifetime must be positive"));
        }
        if !is_valid_delay(response_delay) {
            return Err(Error::token_encoding(format!(
                "response delay must be a non-negative number of seconds, got {response_delay}"
            )));
        }

        let iat = now.timestamp();
        let exp = now
            .checked_add_signed(ttl)
            .ok_or_else(|| Error::token_encoding("token lifetime is too large"))?
            .timestamp();
        if exp <= iat {
            return Err(Error::token_encoding("token lifetime must be at least one second"));
        }

        let claims = TokenClaims {
            sub: Some(TOKEN_SUBJECT.to_string()),
            total_records: Some(total_records),
            response_delay: Some(response_delay),
            iat,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| Error::token_encoding(format!("Failed to encode JWT: {e}")))
    }

    /// Verify a token against the current time
    pub fn decode(&self, token: &str) -> Result<MockConfig> {
        self.decode_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<MockConfig> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => Error::TokenExpired,
                _ => Error::token_invalid(e.to_string()),
            },
        )?;
        let claims = data.claims;

        if claims.exp <= claims.iat {
            return Err(Error::token_invalid("expiry is not after issue time"));
        }
        if now.timestamp() >= claims.exp {
            return Err(Error::TokenExpired);
        }

        let response_delay = claims.response_delay.unwrap_or(DEFAULT_RESPONSE_DELAY);
        if !is_valid_delay(response_delay) {
            return Err(Error::token_invalid(format!(
                "response_delay out of range: {response_delay}"
            )));
        }

        Ok(MockConfig {
            total_records: claims.total_records.unwrap_or(DEFAULT_TOTAL_RECORDS),
            response_delay,
            issued_at: timestamp(claims.iat, "iat")?,
            expires_at: timestamp(claims.exp, "exp")?,
        })
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &Algorithm::HS256)
            .finish_non_exhaustive()
    }
}

fn timestamp(seconds: i64, claim: &str) -> Result<DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| Error::token_invalid(format!("'{claim}' is not a valid timestamp")))
}
