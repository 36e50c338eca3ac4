//! Repository interfaces and their Postgres implementations
//!
//! Handlers and services depend only on the traits below, so the same code
//! runs against Postgres in production and [`MemoryStore`](crate::db::MemoryStore)
//! in tests.

use async_trait::async_trait;

use crate::models::{Attendance, Group, GroupPatch, NewGroup, NewStudent, Student, SubjectQuery};

pub mod attendances;
pub mod groups;
pub mod students;

pub use attendances::PgAttendanceRepo;
pub use groups::PgGroupRepo;
pub use students::PgStudentRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Group persistence
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create(&self, group: NewGroup) -> Result<Group, DbError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbError>;

    /// Every group, ordered by id ascending.
    async fn find_all(&self) -> Result<Vec<Group>, DbError>;

    /// Groups whose subject contains the term, case-insensitively, ordered by id.
    async fn search_by_subject(&self, query: &SubjectQuery) -> Result<Vec<Group>, DbError>;

    /// Apply a partial update; `None` when the id doesn't exist.
    async fn update_by_id(&self, id: i32, patch: GroupPatch) -> Result<Option<Group>, DbError>;

    /// Delete by id, returning whether a row was removed.
    async fn delete_by_id(&self, id: i32) -> Result<bool, DbError>;
}

/// Student persistence
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(&self, student: NewStudent) -> Result<Student, DbError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbError>;
}

/// Attendance persistence
#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn create(&self, student_id: i32, group_id: i32) -> Result<Attendance, DbError>;

    /// Records for one group, oldest first.
    async fn list_for_group(&self, group_id: i32) -> Result<Vec<Attendance>, DbError>;
}
