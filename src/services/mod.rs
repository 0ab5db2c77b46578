pub mod coordinator;
pub mod priority_analyst;
pub mod resource_matcher;
pub mod risk_assessor;
pub mod roster;

pub use coordinator::WeightedCoordinator;
pub use priority_analyst::DeadlinePriorityAnalyst;
pub use resource_matcher::SkillMatchResourceMatcher;
pub use risk_assessor::HeuristicRiskAssessor;
pub use roster::StaticRoster;
