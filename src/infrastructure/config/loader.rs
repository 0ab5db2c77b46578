use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid weight {name}: {value}. Must be non-negative")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Weights for {0} must not all be zero")]
    ZeroWeightTotal(&'static str),

    #[error(
        "Invalid risk thresholds: medium ({0}) must be below high ({1}) and both within [0, 1]"
    )]
    InvalidRiskThresholds(f64, f64),

    #[error("Invalid deadline horizon: {0} days. Must be at least 1")]
    InvalidDeadlineHorizon(i64),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .quorum/config.yaml (project config)
    /// 3. .quorum/local.yaml (project local overrides, optional)
    /// 4. Environment variables (`QUORUM_*` prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".quorum/config.yaml"))
            .merge(Yaml::file(".quorum/local.yaml"))
            .merge(Env::prefixed("QUORUM_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let scoring = &config.scoring;

        let named_weights = [
            ("matcher.skills", scoring.matcher.skills),
            ("matcher.availability", scoring.matcher.availability),
            ("matcher.workload", scoring.matcher.workload),
            ("matcher.experience", scoring.matcher.experience),
            ("risk.deadline_weight", scoring.risk.deadline_weight),
            ("risk.scope_weight", scoring.risk.scope_weight),
            ("risk.effort_weight", scoring.risk.effort_weight),
            ("coordinator.fit", scoring.coordinator.fit),
            ("coordinator.urgency", scoring.coordinator.urgency),
            ("coordinator.risk", scoring.coordinator.risk),
            (
                "priority.deadline_boost_max",
                scoring.priority.deadline_boost_max,
            ),
            ("priority.effort_boost_max", scoring.priority.effort_boost_max),
        ];
        for (name, value) in named_weights {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        if scoring.matcher.total() <= 0.0 {
            return Err(ConfigError::ZeroWeightTotal("matcher"));
        }
        let risk_total =
            scoring.risk.deadline_weight + scoring.risk.scope_weight + scoring.risk.effort_weight;
        if risk_total <= 0.0 {
            return Err(ConfigError::ZeroWeightTotal("risk"));
        }
        let coordinator_total =
            scoring.coordinator.fit + scoring.coordinator.urgency + scoring.coordinator.risk;
        if coordinator_total <= 0.0 {
            return Err(ConfigError::ZeroWeightTotal("coordinator"));
        }

        let medium = scoring.risk.medium_threshold;
        let high = scoring.risk.high_threshold;
        if !(0.0..=1.0).contains(&medium) || !(0.0..=1.0).contains(&high) || medium >= high {
            return Err(ConfigError::InvalidRiskThresholds(medium, high));
        }

        if scoring.priority.deadline_horizon_days < 1 {
            return Err(ConfigError::InvalidDeadlineHorizon(
                scoring.priority.deadline_horizon_days,
            ));
        }

        if !(0.0..=1.0).contains(&scoring.coordinator.overload_threshold) {
            return Err(ConfigError::ValidationFailed(format!(
                "coordinator.overload_threshold must be within [0, 1], got {}",
                scoring.coordinator.overload_threshold
            )));
        }

        for person in &config.roster {
            if person.id.is_empty() {
                return Err(ConfigError::ValidationFailed(
                    "roster entries must have a non-empty id".to_string(),
                ));
            }
            if !(0.0..=1.0).contains(&person.availability)
                || !(0.0..=1.0).contains(&person.current_workload)
            {
                return Err(ConfigError::ValidationFailed(format!(
                    "roster entry '{}' has availability or workload outside [0, 1]",
                    person.id
                )));
            }
        }

        Ok(())
    }
}
