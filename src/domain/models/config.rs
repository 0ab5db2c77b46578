//! Configuration models for the quorum engine.
//!
//! The config is injected at engine construction and forwarded verbatim to
//! the collaborators; each reference implementation reads only its own
//! section.

use serde::{Deserialize, Serialize};

use super::person::Person;

/// Main configuration structure for Quorum
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Scoring weights for the reference collaborators
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default roster override; empty means use the built-in roster
    #[serde(default)]
    pub roster: Vec<Person>,
}

/// Weights and thresholds for all reference scoring collaborators
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringConfig {
    /// Priority analyst weights
    #[serde(default)]
    pub priority: PriorityWeights,

    /// Resource matcher weights
    #[serde(default)]
    pub matcher: MatcherWeights,

    /// Risk assessor weights and thresholds
    #[serde(default)]
    pub risk: RiskConfig,

    /// Coordinator merge weights
    #[serde(default)]
    pub coordinator: CoordinatorWeights,
}

/// Weights for the deadline-driven priority analyst
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriorityWeights {
    /// Base score assumed when the task carries no urgency hint (0-10)
    #[serde(default = "default_base_score")]
    pub base_score: f64,

    /// Maximum score boost from deadline proximity
    #[serde(default = "default_deadline_boost_max")]
    pub deadline_boost_max: f64,

    /// Horizon within which a deadline starts boosting the score, in days
    #[serde(default = "default_deadline_horizon_days")]
    pub deadline_horizon_days: i64,

    /// Maximum score boost from estimated effort
    #[serde(default = "default_effort_boost_max")]
    pub effort_boost_max: f64,

    /// Effort (hours) at which the effort boost saturates
    #[serde(default = "default_effort_reference_hours")]
    pub effort_reference_hours: f64,
}

const fn default_base_score() -> f64 {
    5.0
}

const fn default_deadline_boost_max() -> f64 {
    4.0
}

const fn default_deadline_horizon_days() -> i64 {
    14
}

const fn default_effort_boost_max() -> f64 {
    1.0
}

const fn default_effort_reference_hours() -> f64 {
    80.0
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            base_score: default_base_score(),
            deadline_boost_max: default_deadline_boost_max(),
            deadline_horizon_days: default_deadline_horizon_days(),
            effort_boost_max: default_effort_boost_max(),
            effort_reference_hours: default_effort_reference_hours(),
        }
    }
}

/// Blend weights for the skill-match resource matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MatcherWeights {
    /// Weight of required-skill overlap
    #[serde(default = "default_skills_weight")]
    pub skills: f64,

    /// Weight of availability
    #[serde(default = "default_availability_weight")]
    pub availability: f64,

    /// Weight of inverse workload
    #[serde(default = "default_workload_weight")]
    pub workload: f64,

    /// Weight of experience level
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
}

const fn default_skills_weight() -> f64 {
    0.4
}

const fn default_availability_weight() -> f64 {
    0.25
}

const fn default_workload_weight() -> f64 {
    0.2
}

const fn default_experience_weight() -> f64 {
    0.15
}

impl Default for MatcherWeights {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            availability: default_availability_weight(),
            workload: default_workload_weight(),
            experience: default_experience_weight(),
        }
    }
}

impl MatcherWeights {
    /// Sum of all blend weights.
    pub fn total(&self) -> f64 {
        self.skills + self.availability + self.workload + self.experience
    }
}

/// Weights and level thresholds for the heuristic risk assessor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskConfig {
    /// Risk score at or above which the level becomes medium
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: f64,

    /// Risk score at or above which the level becomes high
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,

    /// Weight of deadline pressure in the risk score
    #[serde(default = "default_risk_deadline_weight")]
    pub deadline_weight: f64,

    /// Weight of skill-scope breadth in the risk score
    #[serde(default = "default_risk_scope_weight")]
    pub scope_weight: f64,

    /// Weight of effort size in the risk score
    #[serde(default = "default_risk_effort_weight")]
    pub effort_weight: f64,
}

const fn default_medium_threshold() -> f64 {
    0.35
}

const fn default_high_threshold() -> f64 {
    0.65
}

const fn default_risk_deadline_weight() -> f64 {
    0.5
}

const fn default_risk_scope_weight() -> f64 {
    0.25
}

const fn default_risk_effort_weight() -> f64 {
    0.25
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            medium_threshold: default_medium_threshold(),
            high_threshold: default_high_threshold(),
            deadline_weight: default_risk_deadline_weight(),
            scope_weight: default_risk_scope_weight(),
            effort_weight: default_risk_effort_weight(),
        }
    }
}

/// Merge weights for the weighted coordinator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CoordinatorWeights {
    /// Weight of the best candidate's fit in the confidence blend
    #[serde(default = "default_fit_weight")]
    pub fit: f64,

    /// Weight of priority urgency in the confidence blend
    #[serde(default = "default_urgency_weight")]
    pub urgency: f64,

    /// Weight of inverted risk in the confidence blend
    #[serde(default = "default_risk_weight")]
    pub risk: f64,

    /// Workload above which the chosen assignee escalates the risk level
    #[serde(default = "default_overload_threshold")]
    pub overload_threshold: f64,

    /// Confidence ceiling applied when no candidate could be chosen
    #[serde(default = "default_unassigned_confidence_cap")]
    pub unassigned_confidence_cap: f64,
}

const fn default_fit_weight() -> f64 {
    0.4
}

const fn default_urgency_weight() -> f64 {
    0.3
}

const fn default_risk_weight() -> f64 {
    0.3
}

const fn default_overload_threshold() -> f64 {
    0.85
}

const fn default_unassigned_confidence_cap() -> f64 {
    0.3
}

impl Default for CoordinatorWeights {
    fn default() -> Self {
        Self {
            fit: default_fit_weight(),
            urgency: default_urgency_weight(),
            risk: default_risk_weight(),
            overload_threshold: default_overload_threshold(),
            unassigned_confidence_cap: default_unassigned_confidence_cap(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!((config.scoring.matcher.total() - 1.0).abs() < 1e-9);
        assert!(config.scoring.risk.medium_threshold < config.scoring.risk.high_threshold);
        assert_eq!(config.logging.level, "info");
        assert!(config.roster.is_empty());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r"
scoring:
  coordinator:
    fit: 0.6
logging:
  level: debug
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!((config.scoring.coordinator.fit - 0.6).abs() < f64::EPSILON);
        assert!((config.scoring.coordinator.urgency - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }
}
