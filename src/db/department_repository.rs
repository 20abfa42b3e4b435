//! Department repository

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::Department;

#[derive(Debug, sqlx::FromRow)]
struct DepartmentRow {
    id: String,
    name: String,
    description: Option<String>,
}

pub struct DepartmentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Department>> {
        let rows = sqlx::query_as::<_, DepartmentRow>(
            r#"
            SELECT id, name, description
            FROM departments
            ORDER BY name, id
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to list departments")?;

        rows.into_iter().map(row_to_department).collect()
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Department>> {
        let row = sqlx::query_as::<_, DepartmentRow>(
            r#"
            SELECT id, name, description
            FROM departments
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool)
        .await
        .context("Failed to get department")?;

        row.map(row_to_department).transpose()
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM departments WHERE id = ?)")
                .bind(id.to_string())
                .fetch_one(self.pool)
                .await
                .context("Failed to check department existence")?;
        Ok(exists)
    }

    pub async fn insert(&self, department: &Department) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO departments (id, name, description)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(department.id.to_string())
        .bind(&department.name)
        .bind(&department.description)
        .execute(self.pool)
        .await
        .context("Failed to create department")?;

        Ok(())
    }

    pub async fn update(&self, department: &Department) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE departments
            SET name = ?, description = ?, updated_at = datetime('now')
            WHERE id = ?
            "#,
        )
        .bind(&department.name)
        .bind(&department.description)
        .bind(department.id.to_string())
        .execute(self.pool)
        .await
        .context("Failed to update department")?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a department and detach its employees in one transaction.
    ///
    /// Returns the number of employees whose `department_id` was cleared, or
    /// `None` when no such department exists.
    pub async fn delete(&self, id: Uuid) -> Result<Option<u64>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let detached = sqlx::query(
            r#"
            UPDATE employees
            SET department_id = NULL, updated_at = datetime('now')
            WHERE department_id = ?
            "#,
        )
        .bind(id.to_string())
        .execute(&mut *tx)
        .await
        .context("Failed to detach employees from department")?
        .rows_affected();

        let deleted = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .context("Failed to delete department")?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await.context("Failed to roll back transaction")?;
            return Ok(None);
        }

        tx.commit().await.context("Failed to commit transaction")?;
        Ok(Some(detached))
    }
}

fn row_to_department(row: DepartmentRow) -> Result<Department> {
    Ok(Department {
        id: Uuid::parse_str(&row.id)
            .with_context(|| format!("Invalid department id: {}", row.id))?,
        name: row.name,
        description: row.description,
    })
}
