//! Student registration and lookup

use crate::db::StudentRepository;
use crate::models::{NewStudent, Student, ValidationError};

use super::{ServiceError, ServiceResult};

pub const STUDENT: &str = "student";

pub async fn create(repo: &dyn StudentRepository, new: NewStudent) -> ServiceResult<Student> {
    if new.full_name.trim().is_empty() {
        return Err(ValidationError::Empty { field: "full_name" }.into());
    }
    let student = repo.create(new).await?;
    tracing::info!(student_id = student.id, "student created");
    Ok(student)
}

pub async fn get(repo: &dyn StudentRepository, id: i32) -> ServiceResult<Student> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(STUDENT, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[tokio::test]
    async fn create_and_fetch() {
        let store = MemoryStore::new();
        let student = create(
            &store,
            NewStudent {
                full_name: "Dilnoza Aliyeva".into(),
                phone: Some("+998911112233".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(get(&store, student.id).await.unwrap(), student);
    }

    #[tokio::test]
    async fn blank_name_rejected() {
        let store = MemoryStore::new();
        let err = create(
            &store,
            NewStudent {
                full_name: "   ".into(),
                phone: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_student_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(get(&store, 3).await, Err(ServiceError::NotFound { .. })));
    }
}
