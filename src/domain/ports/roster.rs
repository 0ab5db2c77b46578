//! Port for the default candidate roster.

use crate::domain::models::Person;

/// Data collaborator supplying the candidate pool used when a caller does
/// not provide one.
pub trait RosterProvider: Send + Sync {
    /// The default candidate pool, in stable order.
    fn roster(&self) -> Vec<Person>;
}
