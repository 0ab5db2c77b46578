//! Port for candidate resource matching.

use anyhow::Result;
use async_trait::async_trait;

use super::collaborator::Collaborator;
use crate::domain::models::{Person, ResourceOpinion, Task};

/// Port for the resource-fit scoring role.
///
/// The candidate pool is an explicit call parameter: a matcher holds no pool
/// state between calls, so concurrent decision cycles against a shared
/// matcher cannot observe each other's pools.
#[async_trait]
pub trait ResourceMatcher: Collaborator {
    /// Evaluate the given pool against the task's requirements.
    ///
    /// # Arguments
    ///
    /// * `task` - The task whose requirements drive the match
    /// * `pool` - Candidates visible for this call only
    ///
    /// # Returns
    ///
    /// * `Ok(ResourceOpinion)` - Candidates ranked best-fit first
    /// * `Err` - If matching fails
    async fn find_suitable_resources(
        &self,
        task: &Task,
        pool: &[Person],
    ) -> Result<ResourceOpinion>;
}
