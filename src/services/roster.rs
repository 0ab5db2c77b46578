//! Built-in default roster.

use crate::domain::models::{Config, ExperienceLevel, Person};
use crate::domain::ports::RosterProvider;

/// Roster provider backed by a fixed in-memory candidate list.
///
/// The built-in roster is used when neither the caller nor the configuration
/// supplies one.
#[derive(Debug, Clone)]
pub struct StaticRoster {
    people: Vec<Person>,
}

impl StaticRoster {
    /// Create a roster from an explicit candidate list.
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Use the config's roster override when present, else the built-in one.
    pub fn from_config(config: &Config) -> Self {
        if config.roster.is_empty() {
            Self::new(Self::builtin())
        } else {
            Self::new(config.roster.clone())
        }
    }

    /// The four-person built-in candidate pool.
    pub fn builtin() -> Vec<Person> {
        vec![
            Person {
                id: "PERSON001".to_string(),
                name: "Alice Chen".to_string(),
                email: "alice@company.com".to_string(),
                skills: vec![
                    "Python".to_string(),
                    "Flask".to_string(),
                    "Database".to_string(),
                    "Frontend".to_string(),
                ],
                availability: 0.8,
                current_workload: 0.6,
                experience_level: ExperienceLevel::Senior,
                department: "Engineering".to_string(),
            },
            Person {
                id: "PERSON002".to_string(),
                name: "Bob Wang".to_string(),
                email: "bob@company.com".to_string(),
                skills: vec![
                    "Python".to_string(),
                    "Neo4j".to_string(),
                    "AI/ML".to_string(),
                    "System Design".to_string(),
                ],
                availability: 0.9,
                current_workload: 0.4,
                experience_level: ExperienceLevel::Senior,
                department: "Engineering".to_string(),
            },
            Person {
                id: "PERSON003".to_string(),
                name: "Carol Liu".to_string(),
                email: "carol@company.com".to_string(),
                skills: vec![
                    "Project Management".to_string(),
                    "Requirements Analysis".to_string(),
                    "Documentation".to_string(),
                ],
                availability: 0.7,
                current_workload: 0.5,
                experience_level: ExperienceLevel::Mid,
                department: "Product".to_string(),
            },
            Person {
                id: "PERSON004".to_string(),
                name: "David Zhang".to_string(),
                email: "david@company.com".to_string(),
                skills: vec![
                    "System Design".to_string(),
                    "Architecture".to_string(),
                    "Performance".to_string(),
                ],
                availability: 0.6,
                current_workload: 0.7,
                experience_level: ExperienceLevel::Senior,
                department: "Engineering".to_string(),
            },
        ]
    }
}

impl RosterProvider for StaticRoster {
    fn roster(&self) -> Vec<Person> {
        self.people.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roster_has_four_people() {
        let roster = StaticRoster::builtin();
        assert_eq!(roster.len(), 4);
        assert!(roster.iter().all(|p| !p.id.is_empty()));
        assert!(roster
            .iter()
            .all(|p| (0.0..=1.0).contains(&p.availability)));
    }

    #[test]
    fn test_from_config_prefers_override() {
        let config = Config {
            roster: vec![Person {
                id: "X1".to_string(),
                name: "Xena".to_string(),
                email: "xena@example.com".to_string(),
                skills: vec![],
                availability: 1.0,
                current_workload: 0.0,
                experience_level: ExperienceLevel::Junior,
                department: "Ops".to_string(),
            }],
            ..Config::default()
        };

        let roster = StaticRoster::from_config(&config);
        assert_eq!(roster.roster().len(), 1);
        assert_eq!(roster.roster()[0].id, "X1");
    }

    #[test]
    fn test_from_config_falls_back_to_builtin() {
        let roster = StaticRoster::from_config(&Config::default());
        assert_eq!(roster.roster().len(), 4);
    }
}
