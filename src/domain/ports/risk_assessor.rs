//! Port for task risk assessment.

use anyhow::Result;
use async_trait::async_trait;

use super::collaborator::Collaborator;
use crate::domain::models::{RiskOpinion, Task};

/// Port for the risk scoring role.
#[async_trait]
pub trait RiskAssessor: Collaborator {
    /// Assess the risks of taking on a task.
    ///
    /// # Returns
    ///
    /// * `Ok(RiskOpinion)` - Assessed level, score, and flagged concerns
    /// * `Err` - If the assessment fails
    async fn assess_risks(&self, task: &Task) -> Result<RiskOpinion>;
}
