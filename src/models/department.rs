//! Department data model

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::EmployeeDto;

/// Persisted department record.
///
/// Employees are not owned here; they are looked up by `department_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Wire representation of a department with its employees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub employees: Vec<EmployeeDto>,
}

/// Minimal department view embedded in an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub id: Uuid,
    pub name: String,
}

/// Request to create a department
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update of a department; absent or `null` fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateDepartmentRequest {
    pub fn apply_to(&self, department: &mut Department) {
        if let Some(ref name) = self.name {
            department.name = name.clone();
        }
        if let Some(ref description) = self.description {
            department.description = Some(description.clone());
        }
    }
}
