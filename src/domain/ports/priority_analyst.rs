//! Port for task priority analysis.

use anyhow::Result;
use async_trait::async_trait;

use super::collaborator::Collaborator;
use crate::domain::models::{PriorityOpinion, Task};

/// Port for the priority scoring role.
///
/// An analyst derives an urgency/importance signal from task attributes and
/// must return a well-formed opinion for any well-formed task.
///
/// # Examples
///
/// ```no_run
/// use quorum::domain::models::Task;
/// use quorum::domain::ports::PriorityAnalyst;
/// use anyhow::Result;
///
/// async fn example(analyst: &dyn PriorityAnalyst, task: &Task) -> Result<()> {
///     let opinion = analyst.analyze_priority(task).await?;
///     println!("priority {:.1}: {}", opinion.score, opinion.rationale);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait PriorityAnalyst: Collaborator {
    /// Analyze the priority of a task.
    ///
    /// # Returns
    ///
    /// * `Ok(PriorityOpinion)` - Score, normalized urgency, and rationale
    /// * `Err` - If the analysis fails
    async fn analyze_priority(&self, task: &Task) -> Result<PriorityOpinion>;
}
