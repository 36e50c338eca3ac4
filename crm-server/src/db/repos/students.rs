//! Student repository

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, StudentRepository};
use crate::models::{NewStudent, Student};

/// Postgres-backed student repository
#[derive(Clone)]
pub struct PgStudentRepo {
    pool: PgPool,
}

impl PgStudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepo {
    async fn create(&self, student: NewStudent) -> Result<Student, DbError> {
        let created: Student = sqlx::query_as(
            r#"
            INSERT INTO students (full_name, phone)
            VALUES ($1, $2)
            RETURNING id, full_name, phone, created_at
            "#,
        )
        .bind(&student.full_name)
        .bind(student.phone.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbError> {
        let student: Option<Student> = sqlx::query_as(
            "SELECT id, full_name, phone, created_at FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }
}
