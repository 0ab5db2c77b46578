//! Quorum - Swarm Decision-Aggregation Orchestrator
//!
//! Quorum merges the opinions of three independent scoring collaborators
//! (priority, resource fit, risk) into one ranked recommendation for who
//! should take on a task.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, port contracts, and domain errors
//! - **Service Layer** (`services`): Reference scoring and merge collaborators
//! - **Application Layer** (`application`): The decision engine façade
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use quorum::application::DecisionEngine;
//! use quorum::domain::models::{Config, Task};
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = DecisionEngine::new(&Config::default());
//!     let decision = engine.make_decision(&Task::new("T1"), None).await;
//!     println!("{}", decision.recommendation);
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{
    DecisionEngine, DECISION_METHOD, ENGINE_NAME, ENGINE_VERSION, SCORING_AGENT_COUNT,
};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    AgentOpinions, CandidateFit, Config, Decision, EngineStatus, ExperienceLevel, Person,
    PriorityOpinion, ResourceOpinion, RiskLevel, RiskOpinion, Task,
};
pub use domain::ports::{
    Collaborator, DecisionCoordinator, MetadataStore, PriorityAnalyst, ResourceMatcher,
    RiskAssessor, RosterProvider,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    DeadlinePriorityAnalyst, HeuristicRiskAssessor, SkillMatchResourceMatcher, StaticRoster,
    WeightedCoordinator,
};
