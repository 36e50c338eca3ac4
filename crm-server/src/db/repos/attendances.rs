//! Attendance repository
//!
//! Inserts are single-row and auto-committed. A failed submission leaves
//! earlier rows from the same submission in place.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{AttendanceRepository, DbError};
use crate::models::Attendance;

/// Postgres-backed attendance repository
#[derive(Clone)]
pub struct PgAttendanceRepo {
    pool: PgPool,
}

impl PgAttendanceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepo {
    async fn create(&self, student_id: i32, group_id: i32) -> Result<Attendance, DbError> {
        let record: Attendance = sqlx::query_as(
            r#"
            INSERT INTO attendances (student_id, group_id)
            VALUES ($1, $2)
            RETURNING id, student_id, group_id, created_at
            "#,
        )
        .bind(student_id)
        .bind(group_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_for_group(&self, group_id: i32) -> Result<Vec<Attendance>, DbError> {
        let records: Vec<Attendance> = sqlx::query_as(
            r#"
            SELECT id, student_id, group_id, created_at
            FROM attendances
            WHERE group_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{PgStudentRepo, StudentRepository};
    use crate::db::{create_pool, migrations};
    use crate::models::NewStudent;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn attendance_requires_existing_group() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        let student = PgStudentRepo::new(pool.clone())
            .create(NewStudent {
                full_name: "FK Check".into(),
                phone: None,
            })
            .await
            .unwrap();

        // group_id references groups(id); a missing group violates the FK
        let result = PgAttendanceRepo::new(pool).create(student.id, -1).await;
        assert!(matches!(result, Err(DbError::Sqlx(_))));
    }
}
