//! Identity supertrait shared by every collaborator.

/// Common identity surface for scoring collaborators and the coordinator.
///
/// Status reporting reads these; a `None` version degrades to the `unknown`
/// sentinel rather than failing.
pub trait Collaborator: Send + Sync {
    /// Human-readable collaborator name.
    fn name(&self) -> &str;

    /// Collaborator version, when one is exposed.
    fn version(&self) -> Option<&str> {
        None
    }
}
