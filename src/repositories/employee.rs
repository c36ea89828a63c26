use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::errors::ApiError;
use crate::models::employee::{EmployeePatch, EmployeeReplace, EmployeeRow, NewEmployee};

/// The one employee query: user and department summaries come back in the
/// same round trip, so listing never issues a per-row lookup.
const BASE_SELECT: &str = "\
SELECT e.id, e.employee_id, e.mobile_phone, e.job_title, e.home_address, e.nationality, \
       e.employment_type, e.employee_status, e.gender, e.marital_status, \
       e.date_joined, e.date_of_birth, e.profile_picture, e.date_created, e.date_updated, \
       u.id AS user_id, u.username, u.first_name, u.last_name, u.email, u.is_active, \
       d.id AS department_id, d.name AS department_name, d.description AS department_description \
FROM employees e \
LEFT JOIN users u ON u.id = e.user_id \
LEFT JOIN departments d ON d.id = e.department_id";

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        EmployeeRepository { pool }
    }

    pub async fn list(&self) -> Result<Vec<EmployeeRow>, ApiError> {
        let sql = format!("{} ORDER BY e.date_joined DESC, e.employee_id ASC", BASE_SELECT);
        let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Option<EmployeeRow>, ApiError> {
        let sql = format!("{} WHERE e.id = $1", BASE_SELECT);
        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn create(&self, new: &NewEmployee) -> Result<EmployeeRow, ApiError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO employees (employee_id, user_id, department_id, mobile_phone, \
             job_title, home_address, nationality, employment_type, employee_status, \
             gender, marital_status, date_joined, date_of_birth, profile_picture) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING id",
        )
        .bind(&new.employee_id)
        .bind(new.user_id)
        .bind(new.department_id)
        .bind(&new.mobile_phone)
        .bind(&new.job_title)
        .bind(&new.home_address)
        .bind(&new.nationality)
        .bind(new.employment_type)
        .bind(new.employee_status)
        .bind(new.gender)
        .bind(new.marital_status)
        .bind(new.date_joined)
        .bind(new.date_of_birth)
        .bind(&new.profile_picture)
        .fetch_one(&self.pool)
        .await?;

        self.get(id)
            .await?
            .ok_or_else(|| ApiError::Internal(format!("employee {} vanished after insert", id)))
    }

    /// Full update: every writable column is overwritten. The immutable
    /// `employee_id` business key is left untouched.
    pub async fn replace(
        &self,
        id: i64,
        update: &EmployeeReplace,
    ) -> Result<Option<EmployeeRow>, ApiError> {
        let result = sqlx::query(
            "UPDATE employees SET user_id = $1, department_id = $2, mobile_phone = $3, \
             job_title = $4, home_address = $5, nationality = $6, employment_type = $7, \
             employee_status = $8, gender = $9, marital_status = $10, date_joined = $11, \
             date_of_birth = $12, profile_picture = $13, date_updated = now() \
             WHERE id = $14",
        )
        .bind(update.user_id)
        .bind(update.department_id)
        .bind(&update.mobile_phone)
        .bind(&update.job_title)
        .bind(&update.home_address)
        .bind(&update.nationality)
        .bind(update.employment_type)
        .bind(update.employee_status)
        .bind(update.gender)
        .bind(update.marital_status)
        .bind(update.date_joined)
        .bind(update.date_of_birth)
        .bind(&update.profile_picture)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get(id).await
    }

    /// Partial update: only the supplied fields are written; a supplied
    /// inner `None` binds NULL and clears the column. `date_updated`
    /// always advances, even for an empty patch.
    pub async fn patch(
        &self,
        id: i64,
        patch: &EmployeePatch,
    ) -> Result<Option<EmployeeRow>, ApiError> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("UPDATE employees SET date_updated = now()");

        if let Some(user_id) = patch.user_id {
            qb.push(", user_id = ");
            qb.push_bind(user_id);
        }
        if let Some(department_id) = patch.department_id {
            qb.push(", department_id = ");
            qb.push_bind(department_id);
        }
        if let Some(mobile_phone) = &patch.mobile_phone {
            qb.push(", mobile_phone = ");
            qb.push_bind(mobile_phone.clone());
        }
        if let Some(job_title) = &patch.job_title {
            qb.push(", job_title = ");
            qb.push_bind(job_title.clone());
        }
        if let Some(home_address) = &patch.home_address {
            qb.push(", home_address = ");
            qb.push_bind(home_address.clone());
        }
        if let Some(nationality) = &patch.nationality {
            qb.push(", nationality = ");
            qb.push_bind(nationality.clone());
        }
        if let Some(employment_type) = patch.employment_type {
            qb.push(", employment_type = ");
            qb.push_bind(employment_type);
        }
        if let Some(employee_status) = patch.employee_status {
            qb.push(", employee_status = ");
            qb.push_bind(employee_status);
        }
        if let Some(gender) = patch.gender {
            qb.push(", gender = ");
            qb.push_bind(gender);
        }
        if let Some(marital_status) = patch.marital_status {
            qb.push(", marital_status = ");
            qb.push_bind(marital_status);
        }
        if let Some(date_joined) = patch.date_joined {
            qb.push(", date_joined = ");
            qb.push_bind(date_joined);
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            qb.push(", date_of_birth = ");
            qb.push_bind(date_of_birth);
        }
        if let Some(profile_picture) = &patch.profile_picture {
            qb.push(", profile_picture = ");
            qb.push_bind(profile_picture.clone());
        }

        qb.push(" WHERE id = ");
        qb.push_bind(id);

        let result = qb.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<bool, ApiError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
