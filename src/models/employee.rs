//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, its [`EmployeeRole`], the
//! optional [`Skill`] ratings, and the [`EmployeeInput`] payload used for
//! creating and updating employees.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlannerError, PlannerResult};

/// The lowest allowed skill rating.
pub const MIN_SKILL_RATING: u8 = 1;

/// The highest allowed skill rating.
pub const MAX_SKILL_RATING: u8 = 5;

/// Represents the role an employee has in the company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Administrator managing the plan.
    Admin,
    /// Regular employee.
    #[default]
    Employee,
    /// Temporary agency worker.
    #[serde(alias = "leiharbeiter")]
    TemporaryWorker,
}

/// A named skill with a one-to-five star rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Name of the skill.
    pub name: String,
    /// Rating from 1 to 5.
    pub rating: u8,
}

/// Represents an employee whose absences are planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact email, empty when unknown.
    #[serde(default)]
    pub email: String,
    /// The employee's role.
    #[serde(default)]
    pub role: EmployeeRole,
    /// Yearly vacation allowance in business days.
    pub vacation_days_total: u32,
    /// Rated skills.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// When the employee was registered.
    pub created_date: DateTime<Utc>,
}

/// Payload for creating or replacing an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// The employee's role.
    #[serde(default)]
    pub role: EmployeeRole,
    /// Rated skills.
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl EmployeeInput {
    /// Checks the name is present and every skill rating is within 1..=5.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_planner::models::{EmployeeInput, EmployeeRole, Skill};
    ///
    /// let input = EmployeeInput {
    ///     name: "Anna Schmidt".to_string(),
    ///     email: String::new(),
    ///     role: EmployeeRole::Employee,
    ///     skills: vec![Skill { name: "Forklift".to_string(), rating: 6 }],
    /// };
    /// assert!(input.validate().is_err());
    /// ```
    pub fn validate(&self) -> PlannerResult<()> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if let Some(skill) = self
            .skills
            .iter()
            .find(|s| !(MIN_SKILL_RATING..=MAX_SKILL_RATING).contains(&s.rating))
        {
            return Err(PlannerError::InvalidEmployee {
                field: "skills".to_string(),
                message: format!(
                    "rating {} for '{}' is outside {}..={}",
                    skill.rating, skill.name, MIN_SKILL_RATING, MAX_SKILL_RATING
                ),
            });
        }

        Ok(())
    }

    /// Builds a new employee record from this input.
    pub fn into_employee(self, vacation_days_total: u32) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            role: self.role,
            vacation_days_total,
            skills: self.skills,
            created_date: Utc::now(),
        }
    }
}

impl Employee {
    /// Replaces the editable fields, keeping id, allowance and creation date.
    pub fn apply(&mut self, input: EmployeeInput) {
        self.name = input.name;
        self.email = input.email;
        self.role = input.role;
        self.skills = input.skills;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_input() -> EmployeeInput {
        EmployeeInput {
            name: "Jonas Weber".to_string(),
            email: "jonas@example.com".to_string(),
            role: EmployeeRole::Employee,
            skills: vec![Skill {
                name: "Welding".to_string(),
                rating: 4,
            }],
        }
    }

    #[test]
    fn test_deserialize_minimal_input_uses_defaults() {
        let json = r#"{ "name": "Jonas Weber" }"#;

        let input: EmployeeInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.name, "Jonas Weber");
        assert!(input.email.is_empty());
        assert_eq!(input.role, EmployeeRole::Employee);
        assert!(input.skills.is_empty());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeRole::Admin).unwrap(),
            "\"admin\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeRole::TemporaryWorker).unwrap(),
            "\"temporary_worker\""
        );
        let legacy: EmployeeRole = serde_json::from_str("\"leiharbeiter\"").unwrap();
        assert_eq!(legacy, EmployeeRole::TemporaryWorker);
    }

    #[test]
    fn test_validate_accepts_valid_input() {
        assert!(create_test_input().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut input = create_test_input();
        input.name = "   ".to_string();

        match input.validate() {
            Err(PlannerError::InvalidEmployee { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected InvalidEmployee error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_rating() {
        let mut input = create_test_input();
        input.skills[0].rating = 0;

        match input.validate() {
            Err(PlannerError::InvalidEmployee { field, message }) => {
                assert_eq!(field, "skills");
                assert!(message.contains("Welding"));
            }
            other => panic!("Expected InvalidEmployee error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_employee_sets_allowance() {
        let employee = create_test_input().into_employee(25);
        assert_eq!(employee.name, "Jonas Weber");
        assert_eq!(employee.vacation_days_total, 25);
        assert_eq!(employee.skills.len(), 1);
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut employee = create_test_input().into_employee(28);
        let id = employee.id;
        let created = employee.created_date;

        employee.apply(EmployeeInput {
            name: "Jonas Weber-Krause".to_string(),
            email: String::new(),
            role: EmployeeRole::Admin,
            skills: vec![],
        });

        assert_eq!(employee.id, id);
        assert_eq!(employee.created_date, created);
        assert_eq!(employee.vacation_days_total, 28);
        assert_eq!(employee.name, "Jonas Weber-Krause");
        assert_eq!(employee.role, EmployeeRole::Admin);
    }
}
