//! Employee data model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::DepartmentSummary;

/// Persisted employee record
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Unique identifier, assigned on creation
    pub id: Uuid,

    pub name: String,

    pub email: String,

    pub phone: Option<String>,

    pub salary: Decimal,

    /// Owning department, if any
    pub department_id: Option<Uuid>,
}

/// Wire representation of an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,
    pub department_id: Option<Uuid>,
    /// Summary of the associated department, null when unassigned
    pub department: Option<DepartmentSummary>,
}

/// Request to create an employee
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// Accepts a JSON number or a numeric string
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    pub salary: Decimal,

    #[serde(default)]
    pub department_id: Option<Uuid>,
}

/// Partial update of an employee.
///
/// A field that is absent or `null` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub salary: Option<Decimal>,

    #[serde(default)]
    pub department_id: Option<Uuid>,
}

impl UpdateEmployeeRequest {
    /// Overwrite the fields present in this request, leaving the rest untouched
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(ref name) = self.name {
            employee.name = name.clone();
        }
        if let Some(ref email) = self.email {
            employee.email = email.clone();
        }
        if let Some(ref phone) = self.phone {
            employee.phone = Some(phone.clone());
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(department_id) = self.department_id {
            employee.department_id = Some(department_id);
        }
    }
}
