// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Mock Data API
//!
//! A deterministic mock data service for exercising API clients and
//! connectors. Every response is shaped by the signed API key that
//! accompanies the request.
//!
//! ## Features
//!
//! - **Signed configuration**: HS256 keys carry the collection size and the
//!   simulated latency
//! - **Deterministic records**: record `n` of a kind is identical across
//!   requests, restarts and hosts
//! - **Page-number pagination**: `page` / `page_size` with a uniform envelope
//! - **Three entity kinds**: students, schools and villages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mock_data_api::pagination::{fetch_page, PageRequest};
//! use mock_data_api::token::TokenCodec;
//! use mock_data_api::EntityKind;
//!
//! let codec = TokenCodec::new("secret");
//! let key = codec.encode(250, 0.0, chrono::Duration::days(30))?;
//! let config = codec.decode(&key)?;
//!
//! let page = fetch_page(EntityKind::Student, PageRequest::default(), config.total_records);
//! assert_eq!(page.total_pages, 25);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                 HTTP layer (axum router)                  │
//! │   X-API-Key → token::decode → sleep(delay) → fetch_page   │
//! └───────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴─────────────┬───────────────┐
//! │    Token     │        Pagination          │   Generator   │
//! ├──────────────┼────────────────────────────┼───────────────┤
//! │ HS256 claims │ window math, envelope      │ seeded RNG    │
//! │ expiry check │ request validation         │ stable ids    │
//! └──────────────┴────────────────────────────┴───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Signed API key codec
pub mod token;

/// Deterministic record generation
pub mod generator;

/// Page-number pagination
pub mod pagination;

/// Server configuration
pub mod config;

/// Command-line interface and HTTP server
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
