//! Weighted-blend decision coordinator.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{
    AgentOpinions, CoordinatorWeights, Decision, Task, UNASSIGNED,
};
use crate::domain::ports::{Collaborator, DecisionCoordinator};

/// Reference coordinator.
///
/// Merge policy:
/// - assignee: best-ranked candidate, or the `unassigned` sentinel
/// - confidence: weighted blend of best fit, priority urgency, and inverted
///   risk, normalized into [0, 1]; capped when nobody could be assigned
/// - risk level: the assessor's level, escalated one step when the chosen
///   assignee is already overloaded
#[derive(Clone)]
pub struct WeightedCoordinator {
    weights: CoordinatorWeights,
}

impl WeightedCoordinator {
    /// Create a coordinator with the given merge weights.
    pub fn new(weights: CoordinatorWeights) -> Self {
        Self { weights }
    }

    /// Synchronous merge core; the port implementation delegates here.
    pub fn merge(&self, task: &Task, opinions: &AgentOpinions) -> Decision {
        let task_id = task.id_or_unknown();
        let best = opinions.resources.best();

        let fit = best.map_or(0.0, |b| b.fit_score);
        let weight_total = self.weights.fit + self.weights.urgency + self.weights.risk;
        let mut confidence = if weight_total > 0.0 {
            ((self.weights.fit * fit
                + self.weights.urgency * opinions.priority.urgency.clamp(0.0, 1.0)
                + self.weights.risk * (1.0 - opinions.risks.score.clamp(0.0, 1.0)))
                / weight_total)
                .clamp(0.0, 1.0)
        } else {
            0.0
        };

        let mut risk_level = opinions.risks.level;
        let mut overloaded = false;
        if let Some(candidate) = best {
            if candidate.current_workload > self.weights.overload_threshold {
                risk_level = risk_level.escalate();
                overloaded = true;
            }
        } else {
            confidence = confidence.min(self.weights.unassigned_confidence_cap);
        }

        let (assigned_to, recommendation) = match best {
            Some(candidate) => (
                candidate.name.clone(),
                format!(
                    "Assign {} to task {} (fit {:.2}); priority {:.1}/10, risk {}",
                    candidate.name, task_id, candidate.fit_score, opinions.priority.score, risk_level
                ),
            ),
            None => (
                UNASSIGNED.to_string(),
                format!("No suitable candidate in pool; queue task {task_id} for manual assignment"),
            ),
        };

        let mut rationale = format!(
            "fit {:.2}, urgency {:.2}, risk {:.2} ({})",
            fit, opinions.priority.urgency, opinions.risks.score, opinions.risks.level
        );
        if overloaded {
            rationale.push_str("; assignee over workload threshold, risk escalated");
        }
        if let Some(concern) = opinions.risks.concerns.first() {
            rationale.push_str("; top concern: ");
            rationale.push_str(concern);
        }

        let mut decision = Decision::new(
            decision_id(task_id),
            task_id,
            recommendation,
            confidence,
            risk_level,
            assigned_to,
        );
        decision.rationale = Some(rationale);
        decision
    }
}

/// `DEC_<task-id>_<short-uuid>`
fn decision_id(task_id: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("DEC_{task_id}_{}", &suffix[..8])
}

impl Collaborator for WeightedCoordinator {
    fn name(&self) -> &str {
        "Weighted Coordinator"
    }

    fn version(&self) -> Option<&str> {
        Some("1.0.0")
    }
}

#[async_trait]
impl DecisionCoordinator for WeightedCoordinator {
    async fn coordinate_decision(
        &self,
        task: &Task,
        opinions: &AgentOpinions,
    ) -> Result<Decision> {
        Ok(self.merge(task, opinions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{
        CandidateFit, PriorityOpinion, ResourceOpinion, RiskLevel, RiskOpinion,
    };

    fn fit(id: &str, name: &str, fit_score: f64, workload: f64) -> CandidateFit {
        CandidateFit {
            person_id: id.to_string(),
            name: name.to_string(),
            fit_score,
            availability: 0.8,
            current_workload: workload,
            matched_skills: vec![],
            missing_skills: vec![],
        }
    }

    fn opinions(ranked: Vec<CandidateFit>, urgency: f64, risk: f64, level: RiskLevel) -> AgentOpinions {
        AgentOpinions {
            priority: PriorityOpinion {
                agent: "analyst".to_string(),
                score: urgency * 10.0,
                urgency,
                rationale: String::new(),
                factors: vec![],
                details: serde_json::Map::new(),
            },
            resources: ResourceOpinion {
                agent: "matcher".to_string(),
                pool_size: ranked.len(),
                ranked,
                details: serde_json::Map::new(),
            },
            risks: RiskOpinion {
                agent: "assessor".to_string(),
                level,
                score: risk,
                concerns: vec!["something".to_string()],
                details: serde_json::Map::new(),
            },
        }
    }

    fn coordinator() -> WeightedCoordinator {
        WeightedCoordinator::new(CoordinatorWeights::default())
    }

    #[test]
    fn test_assigns_best_candidate() {
        let ops = opinions(
            vec![fit("P1", "Alice", 0.9, 0.3), fit("P2", "Bob", 0.4, 0.3)],
            0.7,
            0.2,
            RiskLevel::Low,
        );
        let decision = coordinator().merge(&Task::new("T1"), &ops);
        assert_eq!(decision.assigned_to, "Alice");
        assert_eq!(decision.task_id, "T1");
        assert!(decision.decision_id.starts_with("DEC_T1_"));
        assert!(!decision.decision_id.ends_with("_ERROR"));
        assert!(decision.recommendation.contains("Alice"));
    }

    #[test]
    fn test_empty_pool_is_unassigned_with_capped_confidence() {
        let ops = opinions(vec![], 1.0, 0.0, RiskLevel::Low);
        let decision = coordinator().merge(&Task::new("T1"), &ops);
        assert_eq!(decision.assigned_to, UNASSIGNED);
        assert!(decision.confidence <= 0.3);
        assert!(decision.recommendation.contains("manual assignment"));
    }

    #[test]
    fn test_overloaded_assignee_escalates_risk() {
        let ops = opinions(
            vec![fit("P1", "Alice", 0.9, 0.95)],
            0.5,
            0.1,
            RiskLevel::Low,
        );
        let decision = coordinator().merge(&Task::new("T1"), &ops);
        assert_eq!(decision.risk_level, RiskLevel::Medium);
        assert!(decision
            .rationale
            .as_deref()
            .unwrap()
            .contains("risk escalated"));
    }

    #[test]
    fn test_high_risk_is_not_escalated_past_high() {
        let ops = opinions(
            vec![fit("P1", "Alice", 0.9, 0.95)],
            0.5,
            0.9,
            RiskLevel::High,
        );
        let decision = coordinator().merge(&Task::new("T1"), &ops);
        assert_eq!(decision.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_confidence_stays_in_unit_interval() {
        let ops = opinions(vec![fit("P1", "Alice", 1.0, 0.0)], 1.0, 0.0, RiskLevel::Low);
        let decision = coordinator().merge(&Task::new("T1"), &ops);
        assert!(decision.confidence >= 0.0 && decision.confidence <= 1.0);

        let ops = opinions(vec![fit("P1", "Alice", 0.0, 0.0)], 0.0, 1.0, RiskLevel::High);
        let decision = coordinator().merge(&Task::new("T1"), &ops);
        assert!(decision.confidence >= 0.0 && decision.confidence <= 1.0);
    }

    #[test]
    fn test_missing_task_id_uses_sentinel() {
        let ops = opinions(vec![], 0.5, 0.5, RiskLevel::Medium);
        let decision = coordinator().merge(&Task::default(), &ops);
        assert_eq!(decision.task_id, "unknown");
        assert!(decision.decision_id.starts_with("DEC_unknown_"));
    }
}
