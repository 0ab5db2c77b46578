//! Heuristic risk assessor.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::models::{RiskConfig, RiskLevel, RiskOpinion, Task};
use crate::domain::ports::{Collaborator, MetadataStore, RiskAssessor};

/// Deadlines closer than this many days start contributing risk.
const DEADLINE_HORIZON_DAYS: i64 = 7;

/// Skill-count at which scope risk saturates.
const SCOPE_REFERENCE_SKILLS: usize = 5;

/// Effort (hours) at which effort risk saturates.
const EFFORT_REFERENCE_HOURS: f64 = 80.0;

/// Reference risk assessor.
///
/// Risk score is a weighted blend of deadline pressure, skill-scope breadth,
/// and effort size; the score maps onto low/medium/high via configured
/// thresholds and each triggered component becomes a flagged concern.
#[derive(Clone)]
pub struct HeuristicRiskAssessor {
    config: RiskConfig,
    #[allow(dead_code)] // Reserved for history-aware scoring
    metadata_store: Option<Arc<dyn MetadataStore>>,
}

impl HeuristicRiskAssessor {
    /// Create an assessor with the given thresholds and weights.
    pub fn new(config: RiskConfig) -> Self {
        Self {
            config,
            metadata_store: None,
        }
    }

    /// Attach an external metadata store handle.
    pub fn with_metadata_store(mut self, store: Option<Arc<dyn MetadataStore>>) -> Self {
        self.metadata_store = store;
        self
    }

    fn deadline_pressure(task: &Task, now: DateTime<Utc>) -> f64 {
        match task.deadline {
            Some(deadline) if deadline <= now => 1.0,
            Some(deadline) => {
                let horizon = Duration::days(DEADLINE_HORIZON_DAYS).num_seconds();
                #[allow(clippy::cast_precision_loss)]
                let ratio = 1.0 - (deadline - now).num_seconds() as f64 / horizon as f64;
                ratio.clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }

    fn scope_breadth(task: &Task) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let ratio = task.required_skills.len() as f64 / SCOPE_REFERENCE_SKILLS as f64;
        ratio.clamp(0.0, 1.0)
    }

    fn effort_size(task: &Task) -> f64 {
        let hours = task.estimated_hours.unwrap_or(0.0);
        (hours / EFFORT_REFERENCE_HOURS).clamp(0.0, 1.0)
    }

    fn level_for(&self, score: f64) -> RiskLevel {
        if score >= self.config.high_threshold {
            RiskLevel::High
        } else if score >= self.config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl Collaborator for HeuristicRiskAssessor {
    fn name(&self) -> &str {
        "Heuristic Risk Assessor"
    }
}

#[async_trait]
impl RiskAssessor for HeuristicRiskAssessor {
    async fn assess_risks(&self, task: &Task) -> Result<RiskOpinion> {
        let now = Utc::now();

        let deadline = Self::deadline_pressure(task, now);
        let scope = Self::scope_breadth(task);
        let effort = Self::effort_size(task);

        let weight_total =
            self.config.deadline_weight + self.config.scope_weight + self.config.effort_weight;
        let score = if weight_total > 0.0 {
            ((self.config.deadline_weight * deadline
                + self.config.scope_weight * scope
                + self.config.effort_weight * effort)
                / weight_total)
                .clamp(0.0, 1.0)
        } else {
            0.0
        };

        let mut concerns = Vec::new();
        if deadline >= 0.7 {
            concerns.push("deadline is close or already passed".to_string());
        }
        if task.required_skills.len() >= 4 {
            concerns.push("task demands a broad skill set".to_string());
        }
        if effort >= 0.5 {
            concerns.push("large estimated effort".to_string());
        }

        let mut details = serde_json::Map::new();
        details.insert(
            "deadline_pressure".to_string(),
            serde_json::json!(deadline),
        );
        details.insert("scope_breadth".to_string(), serde_json::json!(scope));
        details.insert("effort_size".to_string(), serde_json::json!(effort));

        Ok(RiskOpinion {
            agent: self.name().to_string(),
            level: self.level_for(score),
            score,
            concerns,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessor() -> HeuristicRiskAssessor {
        HeuristicRiskAssessor::new(RiskConfig::default())
    }

    #[tokio::test]
    async fn test_bare_task_is_low_risk() {
        let opinion = assessor().assess_risks(&Task::new("T1")).await.unwrap();
        assert_eq!(opinion.level, RiskLevel::Low);
        assert!(opinion.score < 0.35);
        assert!(opinion.concerns.is_empty());
    }

    #[tokio::test]
    async fn test_overdue_broad_heavy_task_is_high_risk() {
        let mut task = Task::new("T1");
        task.deadline = Some(Utc::now() - Duration::hours(2));
        task.required_skills = (0..5).map(|i| format!("skill-{i}")).collect();
        task.estimated_hours = Some(120.0);

        let opinion = assessor().assess_risks(&task).await.unwrap();
        assert_eq!(opinion.level, RiskLevel::High);
        assert!((opinion.score - 1.0).abs() < 1e-9);
        assert_eq!(opinion.concerns.len(), 3);
    }

    #[tokio::test]
    async fn test_imminent_deadline_alone_is_medium() {
        let mut task = Task::new("T1");
        task.deadline = Some(Utc::now() + Duration::hours(12));

        let opinion = assessor().assess_risks(&task).await.unwrap();
        assert_eq!(opinion.level, RiskLevel::Medium);
        assert!(opinion
            .concerns
            .iter()
            .any(|c| c.contains("deadline")));
    }

    #[tokio::test]
    async fn test_score_stays_in_unit_interval() {
        let mut task = Task::new("T1");
        task.required_skills = (0..20).map(|i| format!("skill-{i}")).collect();
        task.estimated_hours = Some(10_000.0);
        task.deadline = Some(Utc::now() - Duration::days(30));

        let opinion = assessor().assess_risks(&task).await.unwrap();
        assert!(opinion.score >= 0.0 && opinion.score <= 1.0);
    }

    #[test]
    fn test_level_thresholds() {
        let assessor = assessor();
        assert_eq!(assessor.level_for(0.0), RiskLevel::Low);
        assert_eq!(assessor.level_for(0.35), RiskLevel::Medium);
        assert_eq!(assessor.level_for(0.65), RiskLevel::High);
        assert_eq!(assessor.level_for(1.0), RiskLevel::High);
    }
}
