//! Fixture loading and management.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a fixture file cannot be loaded.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested.
    pub function: String,
    /// POSIX/C spec section reference.
    pub spec_section: String,
    /// Input parameters (serialized).
    pub inputs: serde_json::Value,
    /// Expected output (serialized as string for comparison).
    pub expected_output: String,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let set = FixtureSet {
            version: "v1".to_string(),
            family: "string".to_string(),
            captured_at: "2026-08-01T00:00:00Z".to_string(),
            cases: vec![FixtureCase {
                name: "strlen_basic".to_string(),
                function: "strlen".to_string(),
                spec_section: "C17 7.24.6.3".to_string(),
                inputs: serde_json::json!({ "s": [104, 105, 0] }),
                expected_output: "2".to_string(),
            }],
        };

        let json = set.to_json().unwrap();
        let restored = FixtureSet::from_json(&json).unwrap();
        assert_eq!(restored.family, "string");
        assert_eq!(restored.cases.len(), 1);
        assert_eq!(restored.cases[0].expected_output, "2");
    }
}
