use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::errors::ApiError;
use crate::models::department::{Department, DepartmentPatch, DepartmentReplace, NewDepartment};

#[derive(Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        DepartmentRepository { pool }
    }

    pub async fn list(&self) -> Result<Vec<Department>, ApiError> {
        let departments = sqlx::query_as::<_, Department>(
            "SELECT id, name, description FROM departments ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(departments)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Department>, ApiError> {
        let department = sqlx::query_as::<_, Department>(
            "SELECT id, name, description FROM departments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(department)
    }

    pub async fn create(&self, new: &NewDepartment) -> Result<Department, ApiError> {
        let department = sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name, description) VALUES ($1, $2) \
             RETURNING id, name, description",
        )
        .bind(&new.name)
        .bind(&new.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(department)
    }

    pub async fn replace(
        &self,
        id: i64,
        update: &DepartmentReplace,
    ) -> Result<Option<Department>, ApiError> {
        let department = sqlx::query_as::<_, Department>(
            "UPDATE departments SET name = $1, description = $2, updated_at = now() \
             WHERE id = $3 RETURNING id, name, description",
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(department)
    }

    pub async fn patch(
        &self,
        id: i64,
        patch: &DepartmentPatch,
    ) -> Result<Option<Department>, ApiError> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("UPDATE departments SET updated_at = now()");

        if let Some(name) = &patch.name {
            qb.push(", name = ");
            qb.push_bind(name.clone());
        }
        if let Some(description) = &patch.description {
            qb.push(", description = ");
            qb.push_bind(description.clone());
        }

        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb.push(" RETURNING id, name, description");

        let department = qb
            .build_query_as::<Department>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(department)
    }

    /// Hard delete. Employees referencing the department keep existing;
    /// the schema's ON DELETE SET NULL clears their link.
    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
