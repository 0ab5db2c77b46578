//! Opinion models produced by the scoring collaborators.
//!
//! Each scoring role returns its own structured opinion; the coordinator
//! consumes all three together as [`AgentOpinions`]. Every opinion carries a
//! free-form `details` map so an implementation can attach extras without a
//! schema change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Assessed risk level of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// One step up the scale; `High` saturates.
    pub fn escalate(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(anyhow::anyhow!("Invalid risk level: {s}")),
        }
    }
}

/// Opinion of the priority analyst.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriorityOpinion {
    /// Name of the collaborator that produced this opinion
    pub agent: String,

    /// Priority score on a 0-10 scale (higher is more urgent)
    pub score: f64,

    /// Score normalized into [0, 1]
    pub urgency: f64,

    /// Human-readable explanation of the score
    pub rationale: String,

    /// Factors that contributed to the score
    #[serde(default)]
    pub factors: Vec<String>,

    /// Implementation-specific extras
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// One candidate's fit against a task, as scored by the resource matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CandidateFit {
    /// Person identifier
    pub person_id: String,

    /// Person display name
    pub name: String,

    /// Fit score in [0, 1] (higher is better)
    pub fit_score: f64,

    /// Availability fraction carried over from the person record
    pub availability: f64,

    /// Workload fraction carried over from the person record
    pub current_workload: f64,

    /// Required skills this candidate has
    #[serde(default)]
    pub matched_skills: Vec<String>,

    /// Required skills this candidate lacks
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

/// Opinion of the resource matcher: candidates ranked best-fit first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ResourceOpinion {
    /// Name of the collaborator that produced this opinion
    pub agent: String,

    /// Candidates in descending fit order
    pub ranked: Vec<CandidateFit>,

    /// Size of the pool that was evaluated
    pub pool_size: usize,

    /// Implementation-specific extras
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl ResourceOpinion {
    /// The best-fitting candidate, if the pool produced any.
    pub fn best(&self) -> Option<&CandidateFit> {
        self.ranked.first()
    }
}

/// Opinion of the risk assessor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskOpinion {
    /// Name of the collaborator that produced this opinion
    pub agent: String,

    /// Assessed risk level
    pub level: RiskLevel,

    /// Overall risk score in [0, 1]
    pub score: f64,

    /// Concerns flagged during assessment
    #[serde(default)]
    pub concerns: Vec<String>,

    /// Implementation-specific extras
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// The three scoring opinions a decision cycle collects, keyed by role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AgentOpinions {
    pub priority: PriorityOpinion,
    pub resources: ResourceOpinion,
    pub risks: RiskOpinion,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::Low.to_string(), "low");
        assert_eq!(RiskLevel::Medium.to_string(), "medium");
        assert_eq!(RiskLevel::High.to_string(), "high");
    }

    #[test]
    fn test_risk_level_from_str() {
        assert_eq!("low".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!("critical".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_risk_level_escalate_saturates() {
        assert_eq!(RiskLevel::Low.escalate(), RiskLevel::Medium);
        assert_eq!(RiskLevel::Medium.escalate(), RiskLevel::High);
        assert_eq!(RiskLevel::High.escalate(), RiskLevel::High);
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_resource_opinion_best_empty() {
        let opinion = ResourceOpinion {
            agent: "matcher".to_string(),
            ranked: vec![],
            pool_size: 0,
            details: serde_json::Map::new(),
        };
        assert!(opinion.best().is_none());
    }
}
