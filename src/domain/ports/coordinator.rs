//! Port for decision coordination.

use anyhow::Result;
use async_trait::async_trait;

use super::collaborator::Collaborator;
use crate::domain::models::{AgentOpinions, Decision, Task};

/// Port for the merge role: reconciles the three scoring opinions into one
/// decision.
///
/// Collaborators may disagree (high priority but high risk, best-fit
/// candidate overloaded); the coordinator owns the tie-break and weighting
/// policy. Alternate merge strategies substitute behind this single
/// capability without changing the engine.
#[async_trait]
pub trait DecisionCoordinator: Collaborator {
    /// Synthesize a recommendation, confidence, risk level, and assignee.
    ///
    /// The returned decision's engine-metadata fields are left unset; the
    /// engine stamps them afterwards.
    async fn coordinate_decision(&self, task: &Task, opinions: &AgentOpinions)
        -> Result<Decision>;
}
