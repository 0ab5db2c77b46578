//! The swarm decision engine façade.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    AgentOpinions, CollaboratorStatus, Config, Decision, EngineStatus, Person, PriorityOpinion,
    ResourceOpinion, RiskOpinion, Task,
};
use crate::domain::ports::{
    DecisionCoordinator, MetadataStore, PriorityAnalyst, ResourceMatcher, RiskAssessor,
    RosterProvider,
};
use crate::services::{
    DeadlinePriorityAnalyst, HeuristicRiskAssessor, SkillMatchResourceMatcher, StaticRoster,
    WeightedCoordinator,
};

/// Engine name stamped into every decision.
pub const ENGINE_NAME: &str = "Quorum Decision Engine";

/// Engine version stamped into every decision.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Method label stamped into every decision.
pub const DECISION_METHOD: &str = "swarm_intelligence";

/// Number of scoring collaborators a cycle consults.
pub const SCORING_AGENT_COUNT: usize = 3;

/// Orchestrates one swarm decision cycle.
///
/// The engine resolves the candidate pool, fans the task out to the three
/// scoring collaborators, hands their opinions to the coordinator, and stamps
/// run metadata onto the result. It is stateless across calls apart from the
/// collaborator handles, so a shared instance behind an `Arc` serves
/// concurrent callers safely.
///
/// # Examples
///
/// ```no_run
/// use quorum::application::DecisionEngine;
/// use quorum::domain::models::{Config, Task};
///
/// # async fn example() {
/// let engine = DecisionEngine::new(&Config::default());
/// let decision = engine.make_decision(&Task::new("T1"), None).await;
/// println!("{}: {}", decision.decision_id, decision.recommendation);
/// # }
/// ```
pub struct DecisionEngine {
    priority: Arc<dyn PriorityAnalyst>,
    resources: Arc<dyn ResourceMatcher>,
    risks: Arc<dyn RiskAssessor>,
    coordinator: Arc<dyn DecisionCoordinator>,
    roster: Arc<dyn RosterProvider>,
}

impl DecisionEngine {
    /// Build an engine with the reference collaborators.
    pub fn new(config: &Config) -> Self {
        Self::with_metadata_store(config, None)
    }

    /// Build an engine with the reference collaborators and an external
    /// metadata store handle, which is forwarded to the scoring
    /// collaborators and otherwise unused by the engine.
    pub fn with_metadata_store(
        config: &Config,
        metadata_store: Option<Arc<dyn MetadataStore>>,
    ) -> Self {
        let scoring = &config.scoring;
        Self::with_collaborators(
            Arc::new(
                DeadlinePriorityAnalyst::new(scoring.priority.clone())
                    .with_metadata_store(metadata_store.clone()),
            ),
            Arc::new(
                SkillMatchResourceMatcher::new(scoring.matcher.clone())
                    .with_metadata_store(metadata_store.clone()),
            ),
            Arc::new(
                HeuristicRiskAssessor::new(scoring.risk.clone())
                    .with_metadata_store(metadata_store),
            ),
            Arc::new(WeightedCoordinator::new(scoring.coordinator.clone())),
            Arc::new(StaticRoster::from_config(config)),
        )
    }

    /// Build an engine from injected collaborators.
    ///
    /// This is the substitution point for alternate scoring or merge
    /// strategies.
    pub fn with_collaborators(
        priority: Arc<dyn PriorityAnalyst>,
        resources: Arc<dyn ResourceMatcher>,
        risks: Arc<dyn RiskAssessor>,
        coordinator: Arc<dyn DecisionCoordinator>,
        roster: Arc<dyn RosterProvider>,
    ) -> Self {
        info!(agents = SCORING_AGENT_COUNT, "swarm decision engine initialized");
        Self {
            priority,
            resources,
            risks,
            coordinator,
            roster,
        }
    }

    /// Run one decision cycle.
    ///
    /// Uses the caller's pool when given, else the default roster. This is a
    /// total function: any collaborator or coordinator failure is recovered
    /// into a degraded decision, never surfaced as an error or panic.
    pub async fn make_decision(&self, task: &Task, people: Option<&[Person]>) -> Decision {
        let pool: Cow<'_, [Person]> = match people {
            Some(supplied) => Cow::Borrowed(supplied),
            None => Cow::Owned(self.roster.roster()),
        };

        let mut decision = match self.run_cycle(task, &pool).await {
            Ok(decision) => decision,
            Err(err) => {
                error!(
                    task_id = task.id_or_unknown(),
                    error = %err,
                    "decision cycle failed; returning degraded decision"
                );
                Decision::degraded(task.id_or_unknown(), err.to_string())
            }
        };

        self.stamp_metadata(&mut decision, pool.len());
        decision
    }

    /// Run one decision cycle against an explicit, caller-supplied pool.
    ///
    /// Identical contract to [`make_decision`](Self::make_decision) with the
    /// pool mandatory.
    pub async fn make_decision_with_custom_people(
        &self,
        task: &Task,
        people: &[Person],
    ) -> Decision {
        self.make_decision(task, Some(people)).await
    }

    /// Snapshot the engine and all collaborators.
    ///
    /// Pure introspection: no side effects and no failure mode. Missing
    /// collaborator versions degrade to the `unknown` sentinel.
    pub fn get_engine_status(&self) -> EngineStatus {
        let agents_status = vec![
            CollaboratorStatus::new(self.priority.name(), self.priority.version()),
            CollaboratorStatus::new(self.resources.name(), self.resources.version()),
            CollaboratorStatus::new(self.risks.name(), self.risks.version()),
        ];

        EngineStatus {
            name: ENGINE_NAME.to_string(),
            version: ENGINE_VERSION.to_string(),
            agents_count: agents_status.len(),
            agents_status,
            coordinator_status: CollaboratorStatus::new(
                self.coordinator.name(),
                self.coordinator.version(),
            ),
        }
    }

    /// The fallible inner cycle; `make_decision` recovers its errors.
    async fn run_cycle(&self, task: &Task, pool: &[Person]) -> DomainResult<Decision> {
        info!(
            task_id = task.id_or_unknown(),
            people = pool.len(),
            "starting swarm decision cycle"
        );

        // The three scoring calls are independent and read-only; join them.
        let (priority, resources, risks) = tokio::try_join!(
            self.priority_opinion(task),
            self.resource_opinion(task, pool),
            self.risk_opinion(task),
        )?;

        let opinions = AgentOpinions {
            priority,
            resources,
            risks,
        };

        let decision = self
            .coordinator
            .coordinate_decision(task, &opinions)
            .await
            .map_err(|err| DomainError::CoordinationFailed(format!("{err:#}")))?;

        info!(
            task_id = task.id_or_unknown(),
            confidence = decision.confidence,
            risk_level = %decision.risk_level,
            "swarm decision complete"
        );

        Ok(decision)
    }

    async fn priority_opinion(&self, task: &Task) -> DomainResult<PriorityOpinion> {
        let opinion = self
            .priority
            .analyze_priority(task)
            .await
            .map_err(|err| DomainError::collaborator("priority", &err))?;
        debug!(score = opinion.score, "priority analysis complete");
        Ok(opinion)
    }

    async fn resource_opinion(
        &self,
        task: &Task,
        pool: &[Person],
    ) -> DomainResult<ResourceOpinion> {
        let opinion = self
            .resources
            .find_suitable_resources(task, pool)
            .await
            .map_err(|err| DomainError::collaborator("resources", &err))?;
        debug!(candidates = opinion.ranked.len(), "resource matching complete");
        Ok(opinion)
    }

    async fn risk_opinion(&self, task: &Task) -> DomainResult<RiskOpinion> {
        let opinion = self
            .risks
            .assess_risks(task)
            .await
            .map_err(|err| DomainError::collaborator("risks", &err))?;
        debug!(level = %opinion.level, "risk assessment complete");
        Ok(opinion)
    }

    /// Engine metadata wins: stamped unconditionally after coordination, on
    /// the success and degraded paths alike. The fields are namespaced away
    /// from everything the coordinator writes.
    fn stamp_metadata(&self, decision: &mut Decision, people_considered: usize) {
        decision.swarm_engine = ENGINE_NAME.to_string();
        decision.engine_version = ENGINE_VERSION.to_string();
        decision.decision_method = DECISION_METHOD.to_string();
        decision.agents_involved = SCORING_AGENT_COUNT;
        decision.people_considered = people_considered;
        decision.created_at = chrono::Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_status_covers_all_collaborators() {
        let engine = DecisionEngine::new(&Config::default());
        let status = engine.get_engine_status();

        assert_eq!(status.name, ENGINE_NAME);
        assert_eq!(status.version, ENGINE_VERSION);
        assert_eq!(status.agents_count, SCORING_AGENT_COUNT);
        assert_eq!(status.agents_status.len(), SCORING_AGENT_COUNT);
        for agent in &status.agents_status {
            assert!(!agent.name.is_empty());
            assert!(!agent.version.is_empty());
        }
        assert_eq!(status.coordinator_status.name, "Weighted Coordinator");
    }

    #[test]
    fn test_risk_assessor_version_degrades_to_sentinel() {
        let engine = DecisionEngine::new(&Config::default());
        let status = engine.get_engine_status();
        let assessor = status
            .agents_status
            .iter()
            .find(|a| a.name == "Heuristic Risk Assessor")
            .unwrap();
        assert_eq!(assessor.version, "unknown");
    }

    #[tokio::test]
    async fn test_metadata_is_stamped_on_success() {
        let engine = DecisionEngine::new(&Config::default());
        let decision = engine.make_decision(&Task::new("T1"), None).await;

        assert_eq!(decision.swarm_engine, ENGINE_NAME);
        assert_eq!(decision.engine_version, ENGINE_VERSION);
        assert_eq!(decision.decision_method, DECISION_METHOD);
        assert_eq!(decision.agents_involved, 3);
        assert_eq!(decision.people_considered, 4);
    }
}
