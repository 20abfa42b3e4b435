//! Department service

use std::collections::HashMap;

use tracing::info;
use uuid::Uuid;

use crate::db::{DbPool, DepartmentRepository, EmployeeRepository};
use crate::models::{
    department_to_dto, CreateDepartmentRequest, Department, DepartmentDto, Employee,
    UpdateDepartmentRequest,
};
use crate::utils::{AppError, AppResult};

/// Department service
#[derive(Clone)]
pub struct DepartmentService {
    db: DbPool,
}

impl DepartmentService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// All departments with their employees
    pub async fn list(&self) -> AppResult<Vec<DepartmentDto>> {
        let departments = DepartmentRepository::new(&self.db).list().await?;

        let mut members: HashMap<Uuid, Vec<Employee>> = HashMap::new();
        for employee in EmployeeRepository::new(&self.db).list_assigned().await? {
            if let Some(department_id) = employee.department_id {
                members.entry(department_id).or_default().push(employee);
            }
        }

        Ok(departments
            .iter()
            .map(|d| {
                let employees = members.get(&d.id).map(Vec::as_slice).unwrap_or_default();
                department_to_dto(d, employees)
            })
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<DepartmentDto> {
        let department = DepartmentRepository::new(&self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))?;

        let employees = EmployeeRepository::new(&self.db)
            .list_by_department(id)
            .await?;

        Ok(department_to_dto(&department, &employees))
    }

    pub async fn create(&self, req: CreateDepartmentRequest) -> AppResult<DepartmentDto> {
        let department = Department {
            id: Uuid::new_v4(),
            name: req.name,
            description: req.description,
        };

        DepartmentRepository::new(&self.db)
            .insert(&department)
            .await?;

        info!(department_id = %department.id, "Department created");

        Ok(department_to_dto(&department, &[]))
    }

    /// Apply a partial update; fields absent from `req` keep their stored value
    pub async fn update(&self, id: Uuid, req: UpdateDepartmentRequest) -> AppResult<()> {
        let repo = DepartmentRepository::new(&self.db);
        let mut department = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))?;

        req.apply_to(&mut department);

        if !repo.update(&department).await? {
            return Err(AppError::not_found("Department not found"));
        }

        info!(department_id = %id, "Department updated");
        Ok(())
    }

    /// Delete a department. Its employees are kept and left unassigned.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let detached = DepartmentRepository::new(&self.db)
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))?;

        info!(
            department_id = %id,
            detached_employees = detached,
            "Department deleted"
        );
        Ok(())
    }
}
