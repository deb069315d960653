//! CRUD execution against PostgreSQL. Each call checks a connection out of
//! the pool for the duration of its statements and returns it on every exit
//! path, errors included.

use crate::error::AppError;
use crate::student::{NewStudent, Student, StudentUpdate};
use sqlx::PgPool;

pub struct StudentService;

impl StudentService {
    /// All rows in primary-key order. No pagination, no filtering.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, AppError> {
        tracing::debug!("list students");
        let rows = sqlx::query_as::<_, Student>(
            "SELECT id, name, age, major FROM students ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// One row by primary key, or None.
    pub async fn fetch(pool: &PgPool, id: i32) -> Result<Option<Student>, AppError> {
        tracing::debug!(id, "fetch student");
        let row = sqlx::query_as::<_, Student>(
            "SELECT id, name, age, major FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// Insert one row; the datastore assigns the id. Returns the created row.
    pub async fn create(pool: &PgPool, new: &NewStudent) -> Result<Student, AppError> {
        tracing::debug!(name = %new.name, "create student");
        let row = sqlx::query_as::<_, Student>(
            "INSERT INTO students (name, age, major) VALUES ($1, $2, $3) \
             RETURNING id, name, age, major",
        )
        .bind(&new.name)
        .bind(new.age)
        .bind(&new.major)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Partial update by id: fetch the current row, merge the supplied
    /// fields, write the merged row back. Both statements run on one
    /// transaction; concurrent updates are last-write-wins. Returns None
    /// when the row does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        patch: StudentUpdate,
    ) -> Result<Option<Student>, AppError> {
        tracing::debug!(id, "update student");
        let mut tx = pool.begin().await?;
        let current = sqlx::query_as::<_, Student>(
            "SELECT id, name, age, major FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        let current = match current {
            Some(student) => student,
            None => return Ok(None),
        };
        let merged = patch.apply(current);
        let row = sqlx::query_as::<_, Student>(
            "UPDATE students SET name = $1, age = $2, major = $3 WHERE id = $4 \
             RETURNING id, name, age, major",
        )
        .bind(&merged.name)
        .bind(merged.age)
        .bind(&merged.major)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Some(row))
    }

    /// Delete one row by id. Returns false when no row matched, so a repeat
    /// delete of the same id reports missing rather than succeeding again.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        tracing::debug!(id, "delete student");
        let deleted = sqlx::query("DELETE FROM students WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(deleted.is_some())
    }
}
