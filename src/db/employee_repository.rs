//! Employee repository

use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::Employee;

#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: String,
    name: String,
    email: String,
    phone: Option<String>,
    salary: String,
    department_id: Option<String>,
}

pub struct EmployeeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, phone, salary, department_id
            FROM employees
            ORDER BY name, id
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to list employees")?;

        rows.into_iter().map(row_to_employee).collect()
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, phone, salary, department_id
            FROM employees
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool)
        .await
        .context("Failed to get employee")?;

        row.map(row_to_employee).transpose()
    }

    /// Employees whose `department_id` is `department_id`
    pub async fn list_by_department(&self, department_id: Uuid) -> Result<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, phone, salary, department_id
            FROM employees
            WHERE department_id = ?
            ORDER BY name, id
            "#,
        )
        .bind(department_id.to_string())
        .fetch_all(self.pool)
        .await
        .context("Failed to list employees by department")?;

        rows.into_iter().map(row_to_employee).collect()
    }

    /// Employees that belong to some department
    pub async fn list_assigned(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT id, name, email, phone, salary, department_id
            FROM employees
            WHERE department_id IS NOT NULL
            ORDER BY name, id
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to list assigned employees")?;

        rows.into_iter().map(row_to_employee).collect()
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM employees")
            .fetch_one(self.pool)
            .await
            .context("Failed to count employees")?;
        Ok(count)
    }

    pub async fn insert(&self, employee: &Employee) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, name, email, phone, salary, department_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(employee.id.to_string())
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(employee.salary.to_string())
        .bind(employee.department_id.map(|id| id.to_string()))
        .execute(self.pool)
        .await
        .context("Failed to create employee")?;

        Ok(())
    }

    /// Write every field of `employee` back to its row
    pub async fn update(&self, employee: &Employee) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, email = ?, phone = ?, salary = ?, department_id = ?,
                updated_at = datetime('now')
            WHERE id = ?
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(employee.salary.to_string())
        .bind(employee.department_id.map(|id| id.to_string()))
        .bind(employee.id.to_string())
        .execute(self.pool)
        .await
        .context("Failed to update employee")?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool)
            .await
            .context("Failed to delete employee")?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_employee(row: EmployeeRow) -> Result<Employee> {
    let department_id = row
        .department_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()
        .with_context(|| format!("Invalid department id on employee {}", row.id))?;

    Ok(Employee {
        id: Uuid::parse_str(&row.id)
            .with_context(|| format!("Invalid employee id: {}", row.id))?,
        salary: Decimal::from_str(&row.salary)
            .with_context(|| format!("Invalid salary on employee {}", row.id))?,
        name: row.name,
        email: row.email,
        phone: row.phone,
        department_id,
    })
}
