pub mod config;
pub mod decision;
pub mod opinion;
pub mod person;
pub mod status;
pub mod task;

pub use config::{
    Config, CoordinatorWeights, LoggingConfig, MatcherWeights, PriorityWeights, RiskConfig,
    ScoringConfig,
};
pub use decision::{Decision, FALLBACK_RECOMMENDATION, UNASSIGNED};
pub use opinion::{
    AgentOpinions, CandidateFit, PriorityOpinion, ResourceOpinion, RiskLevel, RiskOpinion,
};
pub use person::{ExperienceLevel, Person};
pub use status::{CollaboratorStatus, EngineStatus, Liveness, UNKNOWN_VERSION};
pub use task::{Task, UNKNOWN_TASK_ID};
