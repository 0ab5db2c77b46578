//! Port for an optional external metadata store.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Decision;

/// Handle to an external metadata/graph store.
///
/// The engine accepts one at construction and forwards it to collaborators
/// that want history-aware scoring; the orchestration core itself never
/// calls it.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Store name for diagnostics.
    fn name(&self) -> &str;

    /// Record a produced decision.
    async fn record_decision(&self, decision: &Decision) -> Result<()>;
}
