//! Entity to DTO mapping
//!
//! Pure conversions from persisted records to their wire shape. Nothing here
//! touches the database, so the functions work on plain in-memory values.

use super::{Department, DepartmentDto, DepartmentSummary, Employee, EmployeeDto};

impl From<&Department> for DepartmentSummary {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
        }
    }
}

/// Map an employee, embedding a summary of `department` when one is given.
///
/// `department` is expected to be the record named by `employee.department_id`.
pub fn employee_to_dto(employee: &Employee, department: Option<&Department>) -> EmployeeDto {
    EmployeeDto {
        id: employee.id,
        name: employee.name.clone(),
        email: employee.email.clone(),
        phone: employee.phone.clone(),
        salary: employee.salary,
        department_id: employee.department_id,
        department: department.map(DepartmentSummary::from),
    }
}

/// Map a department together with the employees that reference it.
///
/// Nested employees leave `department` unset; the enclosing object already
/// names it.
pub fn department_to_dto(department: &Department, employees: &[Employee]) -> DepartmentDto {
    DepartmentDto {
        id: department.id,
        name: department.name.clone(),
        description: department.description.clone(),
        employees: employees
            .iter()
            .map(|employee| employee_to_dto(employee, None))
            .collect(),
    }
}
