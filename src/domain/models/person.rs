//! Person domain model.
//!
//! People are the candidate resources a decision cycle ranks. The engine
//! reads them and hands them to the resource matcher; it never mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Experience level of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Scoring weight used by fit calculations, in [0, 1].
    pub fn weight(self) -> f64 {
        match self {
            Self::Junior => 0.4,
            Self::Mid => 0.7,
            Self::Senior => 1.0,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Junior => write!(f, "junior"),
            Self::Mid => write!(f, "mid"),
            Self::Senior => write!(f, "senior"),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "junior" => Ok(Self::Junior),
            "mid" => Ok(Self::Mid),
            "senior" => Ok(Self::Senior),
            _ => Err(anyhow::anyhow!("Invalid experience level: {s}")),
        }
    }
}

/// A candidate resource considered for assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Person {
    /// Unique person identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Skill tags, in declared order
    #[serde(default)]
    pub skills: Vec<String>,

    /// Availability fraction in [0, 1]
    pub availability: f64,

    /// Current workload fraction in [0, 1]
    pub current_workload: f64,

    /// Experience level classification
    pub experience_level: ExperienceLevel,

    /// Owning department
    pub department: String,
}

impl Person {
    /// Case-insensitive skill membership check.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_person() -> Person {
        Person {
            id: "P1".to_string(),
            name: "Test Person".to_string(),
            email: "test@example.com".to_string(),
            skills: vec!["Rust".to_string(), "System Design".to_string()],
            availability: 0.8,
            current_workload: 0.5,
            experience_level: ExperienceLevel::Senior,
            department: "Engineering".to_string(),
        }
    }

    #[test]
    fn test_experience_level_display() {
        assert_eq!(ExperienceLevel::Junior.to_string(), "junior");
        assert_eq!(ExperienceLevel::Mid.to_string(), "mid");
        assert_eq!(ExperienceLevel::Senior.to_string(), "senior");
    }

    #[test]
    fn test_experience_level_from_str() {
        assert_eq!(
            "junior".parse::<ExperienceLevel>().unwrap(),
            ExperienceLevel::Junior
        );
        assert_eq!(
            "SENIOR".parse::<ExperienceLevel>().unwrap(),
            ExperienceLevel::Senior
        );
        assert!("principal".parse::<ExperienceLevel>().is_err());
    }

    #[test]
    fn test_experience_level_weight_ordering() {
        assert!(ExperienceLevel::Junior.weight() < ExperienceLevel::Mid.weight());
        assert!(ExperienceLevel::Mid.weight() < ExperienceLevel::Senior.weight());
    }

    #[test]
    fn test_has_skill_case_insensitive() {
        let person = sample_person();
        assert!(person.has_skill("rust"));
        assert!(person.has_skill("SYSTEM DESIGN"));
        assert!(!person.has_skill("Kubernetes"));
    }

    #[test]
    fn test_person_serde_round_trip() {
        let person = sample_person();
        let yaml = serde_yaml::to_string(&person).unwrap();
        let back: Person = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, person);
    }
}
