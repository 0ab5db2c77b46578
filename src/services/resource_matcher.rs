//! Skill-overlap resource matcher.

use std::cmp::Ordering;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{CandidateFit, MatcherWeights, Person, ResourceOpinion, Task};
use crate::domain::ports::{Collaborator, MetadataStore, ResourceMatcher};

/// Reference resource matcher.
///
/// Per-candidate fit is a weighted blend of required-skill overlap,
/// availability, inverse workload, and experience level, normalized into
/// [0, 1]. Candidates are ranked descending with a stable id tie-break.
#[derive(Clone)]
pub struct SkillMatchResourceMatcher {
    weights: MatcherWeights,
    #[allow(dead_code)] // Reserved for history-aware scoring
    metadata_store: Option<Arc<dyn MetadataStore>>,
}

impl SkillMatchResourceMatcher {
    /// Create a matcher with the given blend weights.
    pub fn new(weights: MatcherWeights) -> Self {
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

    fn score_candidate(&self, task: &Task, person: &Person) -> CandidateFit {
        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for skill in &task.required_skills {
            if person.has_skill(skill) {
                matched.push(skill.clone());
            } else {
                missing.push(skill.clone());
            }
        }

        // A task with no declared skills fits everyone equally on that axis.
        #[allow(clippy::cast_precision_loss)]
        let overlap = if task.required_skills.is_empty() {
            1.0
        } else {
            matched.len() as f64 / task.required_skills.len() as f64
        };

        let raw = self.weights.skills * overlap
            + self.weights.availability * person.availability.clamp(0.0, 1.0)
            + self.weights.workload * (1.0 - person.current_workload).clamp(0.0, 1.0)
            + self.weights.experience * person.experience_level.weight();

        let total = self.weights.total();
        let fit_score = if total > 0.0 {
            (raw / total).clamp(0.0, 1.0)
        } else {
            0.0
        };

        CandidateFit {
            person_id: person.id.clone(),
            name: person.name.clone(),
            fit_score,
            availability: person.availability,
            current_workload: person.current_workload,
            matched_skills: matched,
            missing_skills: missing,
        }
    }
}

impl Collaborator for SkillMatchResourceMatcher {
    fn name(&self) -> &str {
        "Skill Match Resource Matcher"
    }

    fn version(&self) -> Option<&str> {
        Some("1.0.0")
    }
}

#[async_trait]
impl ResourceMatcher for SkillMatchResourceMatcher {
    async fn find_suitable_resources(
        &self,
        task: &Task,
        pool: &[Person],
    ) -> Result<ResourceOpinion> {
        let mut ranked: Vec<CandidateFit> = pool
            .iter()
            .map(|person| self.score_candidate(task, person))
            .collect();

        ranked.sort_by(|a, b| {
            b.fit_score
                .partial_cmp(&a.fit_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.person_id.cmp(&b.person_id))
        });

        Ok(ResourceOpinion {
            agent: self.name().to_string(),
            ranked,
            pool_size: pool.len(),
            details: serde_json::Map::new(),
        })
    }
}
