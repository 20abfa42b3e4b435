//! Employee service
//!
//! CRUD over employees. Create and update check that a referenced department
//! exists before anything is written; a foreign key failure raised by the
//! store afterwards is reported the same way.

use std::collections::HashMap;

use tracing::{info, warn};
use uuid::Uuid;

use crate::db::{is_foreign_key_violation, DbPool, DepartmentRepository, EmployeeRepository};
use crate::models::{
    employee_to_dto, CreateEmployeeRequest, Department, Employee, EmployeeDto,
    UpdateEmployeeRequest,
};
use crate::utils::{AppError, AppResult};

const DEPARTMENT_DOES_NOT_EXIST: &str = "Department does not exist";
const DEPARTMENT_NOT_FOUND: &str = "Department not found";

/// Employee service
#[derive(Clone)]
pub struct EmployeeService {
    db: DbPool,
}

impl EmployeeService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// All employees, each with a summary of its department
    pub async fn list(&self) -> AppResult<Vec<EmployeeDto>> {
        let employees = EmployeeRepository::new(&self.db).list().await?;
        let departments: HashMap<Uuid, Department> = DepartmentRepository::new(&self.db)
            .list()
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();

        Ok(employees
            .iter()
            .map(|e| {
                let department = e.department_id.and_then(|id| departments.get(&id));
                employee_to_dto(e, department)
            })
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<EmployeeDto> {
        let employee = EmployeeRepository::new(&self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        self.to_dto(&employee).await
    }

    pub async fn create(&self, req: CreateEmployeeRequest) -> AppResult<EmployeeDto> {
        if let Some(department_id) = req.department_id {
            self.require_department(department_id, DEPARTMENT_DOES_NOT_EXIST)
                .await?;
        }

        let employee = Employee {
            id: Uuid::new_v4(),
            name: req.name,
            email: req.email,
            phone: req.phone,
            salary: req.salary,
            department_id: req.department_id,
        };

        EmployeeRepository::new(&self.db)
            .insert(&employee)
            .await
            .map_err(|e| reference_error(e, DEPARTMENT_DOES_NOT_EXIST))?;

        info!(
            employee_id = %employee.id,
            department_id = ?employee.department_id,
            "Employee created"
        );

        self.to_dto(&employee).await
    }

    /// Apply a partial update; fields absent from `req` keep their stored value
    pub async fn update(&self, id: Uuid, req: UpdateEmployeeRequest) -> AppResult<()> {
        let repo = EmployeeRepository::new(&self.db);
        let mut employee = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        if let Some(department_id) = req.department_id {
            self.require_department(department_id, DEPARTMENT_NOT_FOUND)
                .await?;
        }

        req.apply_to(&mut employee);

        let updated = repo
            .update(&employee)
            .await
            .map_err(|e| reference_error(e, DEPARTMENT_NOT_FOUND))?;
        if !updated {
            return Err(AppError::not_found("Employee not found"));
        }

        info!(employee_id = %id, "Employee updated");
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let deleted = EmployeeRepository::new(&self.db).delete(id).await?;
        if !deleted {
            return Err(AppError::not_found("Employee not found"));
        }

        info!(employee_id = %id, "Employee deleted");
        Ok(())
    }

    async fn require_department(&self, department_id: Uuid, message: &str) -> AppResult<()> {
        if DepartmentRepository::new(&self.db)
            .exists(department_id)
            .await?
        {
            Ok(())
        } else {
            warn!(department_id = %department_id, "Rejected unknown department reference");
            Err(AppError::invalid_reference(message))
        }
    }

    async fn to_dto(&self, employee: &Employee) -> AppResult<EmployeeDto> {
        let department = match employee.department_id {
            Some(department_id) => {
                DepartmentRepository::new(&self.db)
                    .get_by_id(department_id)
                    .await?
            }
            None => None,
        };

        Ok(employee_to_dto(employee, department.as_ref()))
    }
}

/// A write rejected by the department foreign key becomes an invalid reference
fn reference_error(err: anyhow::Error, message: &str) -> AppError {
    if is_foreign_key_violation(&err) {
        AppError::invalid_reference(message)
    } else {
        err.into()
    }
}
