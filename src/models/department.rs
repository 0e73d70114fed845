//! Department model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a department and its member employees.
///
/// Membership is a set of employee ids, so adding the same employee twice
/// has no effect. Both the manager and the members are weak references.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Department;
///
/// let mut department = Department::new("ENG", "Engineering");
/// department.add_member("EMP001");
/// department.add_member("EMP001");
/// assert_eq!(department.member_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub department_id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Id of the employee managing the department.
    #[serde(default)]
    pub manager_employee_id: Option<String>,
    /// Ids of the member employees.
    #[serde(default)]
    pub employee_ids: BTreeSet<String>,
}

impl Department {
    /// Creates an empty department with no manager.
    pub fn new(department_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            department_id: department_id.into(),
            name: name.into(),
            description: None,
            manager_employee_id: None,
            employee_ids: BTreeSet::new(),
        }
    }

    /// Adds an employee to the department. Returns false if already a member.
    pub fn add_member(&mut self, employee_id: impl Into<String>) -> bool {
        self.employee_ids.insert(employee_id.into())
    }

    /// Removes an employee from the department. Returns false if not a member.
    pub fn remove_member(&mut self, employee_id: &str) -> bool {
        self.employee_ids.remove(employee_id)
    }

    /// Returns true if the employee is a member.
    pub fn has_member(&self, employee_id: &str) -> bool {
        self.employee_ids.contains(employee_id)
    }

    /// Returns the number of member employees.
    pub fn member_count(&self) -> usize {
        self.employee_ids.len()
    }

    /// Checks that the id and name are present.
    pub fn validate(&self) -> EngineResult<()> {
        if self.department_id.trim().is_empty() {
            return Err(EngineError::InvalidDepartment {
                field: "department_id".to_string(),
                message: "is required".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidDepartment {
                field: "name".to_string(),
                message: "is required".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_a_set() {
        let mut department = Department::new("ENG", "Engineering");
        assert!(department.add_member("EMP002"));
        assert!(department.add_member("EMP001"));
        assert!(!department.add_member("EMP002"));

        assert_eq!(department.member_count(), 2);
        let members: Vec<&str> = department.employee_ids.iter().map(String::as_str).collect();
        assert_eq!(members, vec!["EMP001", "EMP002"]);
    }

    #[test]
    fn test_remove_member() {
        let mut department = Department::new("ENG", "Engineering");
        department.add_member("EMP001");

        assert!(department.remove_member("EMP001"));
        assert!(!department.remove_member("EMP001"));
        assert!(!department.has_member("EMP001"));
    }

    #[test]
    fn test_validate_requires_id_and_name() {
        assert!(Department::new("ENG", "Engineering").validate().is_ok());

        match Department::new(" ", "Engineering").validate() {
            Err(EngineError::InvalidDepartment { field, .. }) => assert_eq!(field, "department_id"),
            other => panic!("Expected InvalidDepartment, got {:?}", other),
        }
        match Department::new("ENG", "").validate() {
            Err(EngineError::InvalidDepartment { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected InvalidDepartment, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"department_id": "HR", "name": "Human Resources"}"#;
        let department: Department = serde_json::from_str(json).unwrap();
        assert_eq!(department.manager_employee_id, None);
        assert_eq!(department.member_count(), 0);
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut department = Department::new("ENG", "Engineering");
        department.description = Some("Builds things".to_string());
        department.manager_employee_id = Some("EMP001".to_string());
        department.add_member("EMP001");

        let json = serde_json::to_string(&department).unwrap();
        let deserialized: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(department, deserialized);
    }
}
