//! Token module
//!
//! Signed configuration tokens carried in the `X-API-Key` header.
//!
//! A token is an HS256 JWT whose claims tell the server how many records to
//! pretend it holds and how long to wait before answering. The `TokenCodec`
//! owns the shared secret and is the only place tokens are minted or checked.

mod codec;
mod types;

pub use codec::TokenCodec;
pub use types::{
    MockConfig, TokenClaims, DEFAULT_RESPONSE_DELAY, DEFAULT_TOTAL_RECORDS, TOKEN_SUBJECT,
};
