//! Deadline-driven priority analyst.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::models::{PriorityOpinion, PriorityWeights, Task};
use crate::domain::ports::{Collaborator, MetadataStore, PriorityAnalyst};

/// Reference priority analyst.
///
/// Score formula: base urgency + deadline proximity boost + effort nudge,
/// clamped onto a 0-10 scale.
#[derive(Clone)]
pub struct DeadlinePriorityAnalyst {
    weights: PriorityWeights,
    #[allow(dead_code)] // Reserved for history-aware scoring
    metadata_store: Option<Arc<dyn MetadataStore>>,
}

impl DeadlinePriorityAnalyst {
    /// Create an analyst with the given weights.
    pub fn new(weights: PriorityWeights) -> Self {
        Self {
            weights,
            metadata_store: None,
        }
    }

    /// Attach an external metadata store handle.
    pub fn with_metadata_store(mut self, store: Option<Arc<dyn MetadataStore>>) -> Self {
        self.metadata_store = store;
        self
    }

    /// Deadline pressure in [0, 1].
    ///
    /// - No deadline: 0
    /// - Deadline passed: 1
    /// - Deadline inside the horizon: proportional to how little time remains
    fn deadline_urgency(&self, task: &Task, now: DateTime<Utc>) -> f64 {
        match task.deadline {
            Some(deadline) if deadline <= now => 1.0,
            Some(deadline) => {
                let horizon = Duration::days(self.weights.deadline_horizon_days).num_seconds();
                if horizon <= 0 {
                    return 0.0;
                }
                #[allow(clippy::cast_precision_loss)]
                let ratio =
                    1.0 - (deadline - now).num_seconds() as f64 / horizon as f64;
                ratio.clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }

    /// Effort nudge in [0, 1]: bigger tasks get slightly more attention.
    fn effort_ratio(&self, task: &Task) -> f64 {
        let hours = task.estimated_hours.unwrap_or(0.0);
        if self.weights.effort_reference_hours <= 0.0 {
            return 0.0;
        }
        (hours / self.weights.effort_reference_hours).clamp(0.0, 1.0)
    }
}

impl Collaborator for DeadlinePriorityAnalyst {
    fn name(&self) -> &str {
        "Deadline Priority Analyst"
    }

    fn version(&self) -> Option<&str> {
        Some("1.0.0")
    }
}

#[async_trait]
impl PriorityAnalyst for DeadlinePriorityAnalyst {
    async fn analyze_priority(&self, task: &Task) -> Result<PriorityOpinion> {
        let now = Utc::now();

        let base = task
            .urgency
            .map_or(self.weights.base_score, f64::from)
            .clamp(0.0, 10.0);
        let deadline_urgency = self.deadline_urgency(task, now);
        let deadline_boost = deadline_urgency * self.weights.deadline_boost_max;
        let effort_boost = self.effort_ratio(task) * self.weights.effort_boost_max;

        let score = (base + deadline_boost + effort_boost).clamp(0.0, 10.0);

        let mut factors = Vec::new();
        if task.urgency.is_some() {
            factors.push("explicit urgency hint".to_string());
        }
        if deadline_urgency > 0.0 {
            factors.push("deadline inside scoring horizon".to_string());
        }
        if effort_boost > 0.0 {
            factors.push("non-trivial estimated effort".to_string());
        }

        let rationale = format!(
            "base {base:.1}, deadline boost {deadline_boost:.2}, effort boost {effort_boost:.2}"
        );

        let mut details = serde_json::Map::new();
        details.insert("base_score".to_string(), serde_json::json!(base));
        details.insert(
            "deadline_boost".to_string(),
            serde_json::json!(deadline_boost),
        );
        details.insert("effort_boost".to_string(), serde_json::json!(effort_boost));

        Ok(PriorityOpinion {
            agent: self.name().to_string(),
            score,
            urgency: score / 10.0,
            rationale,
            factors,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyst() -> DeadlinePriorityAnalyst {
        DeadlinePriorityAnalyst::new(PriorityWeights::default())
    }

    #[tokio::test]
    async fn test_bare_task_scores_base() {
        let opinion = analyst().analyze_priority(&Task::new("T1")).await.unwrap();
        assert!((opinion.score - 5.0).abs() < f64::EPSILON);
        assert!((opinion.urgency - 0.5).abs() < f64::EPSILON);
        assert!(opinion.factors.is_empty());
    }

    #[tokio::test]
    async fn test_urgency_hint_overrides_base() {
        let mut task = Task::new("T1");
        task.urgency = Some(9);
        let opinion = analyst().analyze_priority(&task).await.unwrap();
        assert!((opinion.score - 9.0).abs() < f64::EPSILON);
        assert!(opinion
            .factors
            .iter()
            .any(|f| f.contains("urgency hint")));
    }

    #[tokio::test]
    async fn test_past_deadline_gets_max_boost() {
        let mut task = Task::new("T1");
        task.deadline = Some(Utc::now() - Duration::hours(1));
        let opinion = analyst().analyze_priority(&task).await.unwrap();
        // base 5.0 + full deadline boost 4.0
        assert!((opinion.score - 9.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_far_deadline_no_boost() {
        let mut task = Task::new("T1");
        task.deadline = Some(Utc::now() + Duration::days(60));
        let opinion = analyst().analyze_priority(&task).await.unwrap();
        assert!((opinion.score - 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_approaching_deadline_partial_boost() {
        let mut task = Task::new("T1");
        // 7 of 14 horizon days remaining: about half the boost
        task.deadline = Some(Utc::now() + Duration::days(7));
        let opinion = analyst().analyze_priority(&task).await.unwrap();
        assert!(opinion.score > 6.5 && opinion.score < 7.5);
    }

    #[tokio::test]
    async fn test_score_clamped_to_ten() {
        let mut task = Task::new("T1");
        task.urgency = Some(10);
        task.deadline = Some(Utc::now() - Duration::hours(1));
        task.estimated_hours = Some(500.0);
        let opinion = analyst().analyze_priority(&task).await.unwrap();
        assert!((opinion.score - 10.0).abs() < f64::EPSILON);
        assert!((opinion.urgency - 1.0).abs() < f64::EPSILON);
    }
}
