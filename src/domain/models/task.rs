//! Task domain model.
//!
//! A task is the unit of work a decision cycle evaluates. Beyond the
//! identifier, its attributes are open-ended: the scoring collaborators read
//! whichever fields they understand and ignore the rest. Unknown fields
//! survive deserialization in `extra` so nothing the caller sends is lost.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel used wherever a task id is required but absent.
pub const UNKNOWN_TASK_ID: &str = "unknown";

/// A task submitted for a swarm decision.
///
/// The id is optional by design: a task without one still produces a
/// well-formed decision carrying the `unknown` sentinel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Task {
    /// Task identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Short human-readable title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Longer description of the work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Completion deadline, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    /// Skill tags the work calls for, in declared order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_skills: Vec<String>,

    /// Estimated effort in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    /// Caller-declared urgency hint on a 1-10 scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<u8>,

    /// Any further attributes, preserved verbatim for collaborators
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Task {
    /// Create a task with just an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// The task id, or the `unknown` sentinel when absent.
    pub fn id_or_unknown(&self) -> &str {
        self.id.as_deref().unwrap_or(UNKNOWN_TASK_ID)
    }
}
