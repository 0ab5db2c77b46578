//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the trait interfaces collaborators must implement:
//! - `PriorityAnalyst`: urgency/importance scoring
//! - `ResourceMatcher`: candidate-pool fit scoring
//! - `RiskAssessor`: risk scoring
//! - `DecisionCoordinator`: merge of the three opinions into one decision
//! - `RosterProvider`: default candidate pool
//! - `MetadataStore`: opaque external store handle
//!
//! These traits define the contracts that allow the engine to be independent
//! of specific scoring implementations.

pub mod collaborator;
pub mod coordinator;
pub mod metadata_store;
pub mod priority_analyst;
pub mod resource_matcher;
pub mod risk_assessor;
pub mod roster;

pub use collaborator::Collaborator;
pub use coordinator::DecisionCoordinator;
pub use metadata_store::MetadataStore;
pub use priority_analyst::PriorityAnalyst;
pub use resource_matcher::ResourceMatcher;
pub use risk_assessor::RiskAssessor;
pub use roster::RosterProvider;
