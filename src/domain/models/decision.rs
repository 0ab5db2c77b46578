//! Decision domain model.
//!
//! A decision is the single record a cycle returns: the coordinator's merged
//! recommendation plus the run metadata the engine stamps afterwards. The
//! metadata fields are deliberately separate from the coordinator-owned
//! fields so stamping can never clobber a coordinated value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::opinion::RiskLevel;

/// Sentinel assignee used when no candidate could be chosen.
pub const UNASSIGNED: &str = "unassigned";

/// Recommendation text used on the degraded path.
pub const FALLBACK_RECOMMENDATION: &str =
    "Swarm decision failed; recommend manual review and assignment";

/// The outcome of one decision cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Decision {
    /// Unique decision identifier
    pub decision_id: String,

    /// Id of the task this decision is for (`unknown` when absent)
    pub task_id: String,

    /// The recommended action
    pub recommendation: String,

    /// Confidence in the recommendation, in [0, 1]
    pub confidence: f64,

    /// Merged risk level
    pub risk_level: RiskLevel,

    /// Chosen assignee name, or the `unassigned` sentinel
    pub assigned_to: String,

    /// Supporting detail behind the recommendation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,

    /// Captured failure detail; present only on degraded decisions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Name of the engine that produced this decision (engine-stamped)
    #[serde(default)]
    pub swarm_engine: String,

    /// Version of the engine (engine-stamped)
    #[serde(default)]
    pub engine_version: String,

    /// Method label for the decision process (engine-stamped)
    #[serde(default)]
    pub decision_method: String,

    /// Number of scoring collaborators consulted (engine-stamped)
    #[serde(default)]
    pub agents_involved: usize,

    /// Size of the candidate pool used for this cycle (engine-stamped)
    #[serde(default)]
    pub people_considered: usize,

    /// When the decision was produced (engine-stamped)
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Decision {
    /// Create a decision with coordinator-owned fields set and metadata
    /// fields left for the engine to stamp.
    pub fn new(
        decision_id: impl Into<String>,
        task_id: impl Into<String>,
        recommendation: impl Into<String>,
        confidence: f64,
        risk_level: RiskLevel,
        assigned_to: impl Into<String>,
    ) -> Self {
        Self {
            decision_id: decision_id.into(),
            task_id: task_id.into(),
            recommendation: recommendation.into(),
            confidence,
            risk_level,
            assigned_to: assigned_to.into(),
            rationale: None,
            error: None,
            swarm_engine: String::new(),
            engine_version: String::new(),
            decision_method: String::new(),
            agents_involved: 0,
            people_considered: 0,
            created_at: Utc::now(),
        }
    }

    /// Build the fixed-shape fallback decision for a failed cycle.
    ///
    /// Confidence is pinned low, risk high, and the assignee is the
    /// `unassigned` sentinel; the captured error rides along for inspection.
    pub fn degraded(task_id: &str, error: impl Into<String>) -> Self {
        let mut decision = Self::new(
            format!("DEC_{task_id}_ERROR"),
            task_id,
            FALLBACK_RECOMMENDATION,
            0.1,
            RiskLevel::High,
            UNASSIGNED,
        );
        decision.error = Some(error.into());
        decision
    }

    /// Whether this decision came from the fallback path.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}
