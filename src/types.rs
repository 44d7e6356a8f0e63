//! Common types used throughout the mock data API
//!
//! This module contains shared type definitions and constants used across
//! multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Header carrying the signed configuration token
pub const API_KEY_HEADER: &str = "X-API-Key";

// ============================================================================
// Entity Kinds
// ============================================================================

/// The kinds of synthetic records the API serves
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Student records
    #[value(alias = "students")]
    Student,
    /// School records
    #[value(alias = "schools")]
    School,
    /// Village records
    #[value(alias = "villages")]
    Village,
}

impl EntityKind {
    /// All kinds, in route order
    pub const ALL: [EntityKind; 3] = [EntityKind::Student, EntityKind::School, EntityKind::Village];

    /// Singular name, used as the stable id namespace
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Student => "student",
            EntityKind::School => "school",
            EntityKind::Village => "village",
        }
    }

    /// Plural collection name, used in routes
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Student => "students",
            EntityKind::School => "schools",
            EntityKind::Village => "villages",
        }
    }

    /// Route path serving this kind
    pub fn route(self) -> String {
        format!("/api/{}", self.collection())
    }

    /// Offset added to a record index to derive its RNG seed.
    ///
    /// Keeps the three kinds on separate pseudo-random streams for equal indices.
    pub fn seed_offset(self) -> u64 {
        match self {
            EntityKind::Student => 0,
            EntityKind::School => 10_000,
            EntityKind::Village => 20_000,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_serde() {
        let kind: EntityKind = serde_json::from_str("\"school\"").unwrap();
        assert_eq!(kind, EntityKind::School);

        let json = serde_json::to_string(&EntityKind::Village).unwrap();
        assert_eq!(json, "\"village\"");
    }

    #[test]
    fn test_entity_kind_routes() {
        assert_eq!(EntityKind::Student.route(), "/api/students");
        assert_eq!(EntityKind::School.route(), "/api/schools");
        assert_eq!(EntityKind::Village.route(), "/api/villages");
    }

    #[test]
    fn test_seed_offsets_are_distinct() {
        let offsets: std::collections::HashSet<_> =
            EntityKind::ALL.iter().map(|k| k.seed_offset()).collect();
        assert_eq!(offsets.len(), 3);
    }
}
