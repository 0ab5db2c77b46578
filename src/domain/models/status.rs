//! Engine status introspection models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel reported when a collaborator exposes no version.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Liveness marker for a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Liveness {
    Active,
}

impl fmt::Display for Liveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
        }
    }
}

/// Status entry for one collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CollaboratorStatus {
    /// Collaborator name
    pub name: String,

    /// Reported version, or the `unknown` sentinel
    pub version: String,

    /// Liveness marker
    pub status: Liveness,
}

impl CollaboratorStatus {
    /// Build a status entry, substituting the sentinel for a missing version.
    pub fn new(name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            version: version.unwrap_or(UNKNOWN_VERSION).to_string(),
            status: Liveness::Active,
        }
    }
}

/// Snapshot of the engine and all its collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineStatus {
    /// Engine name
    pub name: String,

    /// Engine version
    pub version: String,

    /// Number of scoring collaborators
    pub agents_count: usize,

    /// One entry per scoring collaborator
    pub agents_status: Vec<CollaboratorStatus>,

    /// Entry for the coordinator
    pub coordinator_status: CollaboratorStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_version_degrades_to_sentinel() {
        let status = CollaboratorStatus::new("matcher", None);
        assert_eq!(status.version, UNKNOWN_VERSION);
        assert_eq!(status.status, Liveness::Active);
    }

    #[test]
    fn test_version_passthrough() {
        let status = CollaboratorStatus::new("analyst", Some("2.1.0"));
        assert_eq!(status.version, "2.1.0");
    }

    #[test]
    fn test_liveness_serializes_lowercase() {
        let json = serde_json::to_value(Liveness::Active).unwrap();
        assert_eq!(json, "active");
    }
}
