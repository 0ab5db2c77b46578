//! Application layer: decision-cycle orchestration.

pub mod decision_engine;

pub use decision_engine::{
    DecisionEngine, DECISION_METHOD, ENGINE_NAME, ENGINE_VERSION, SCORING_AGENT_COUNT,
};
