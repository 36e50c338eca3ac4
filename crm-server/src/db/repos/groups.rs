//! Group repository
//!
//! - list: full scan ordered by id; pagination happens in memory
//! - search: ILIKE with escaped wildcards
//! - update: single UPDATE ... RETURNING with COALESCE per column

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, GroupRepository};
use crate::models::{Group, GroupPatch, NewGroup, SubjectQuery};

const GROUP_COLUMNS: &str =
    "id, subject, days, start_time, end_time, teacher_name, teacher_phone, created_at, updated_at";

/// Postgres-backed group repository
#[derive(Clone)]
pub struct PgGroupRepo {
    pool: PgPool,
}

impl PgGroupRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepo {
    async fn create(&self, group: NewGroup) -> Result<Group, DbError> {
        let created = sqlx::query_as::<_, Group>(&format!(
            r#"
            INSERT INTO groups (subject, days, start_time, end_time, teacher_name, teacher_phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {GROUP_COLUMNS}
            "#
        ))
        .bind(&group.subject)
        .bind(&group.days)
        .bind(group.start_time)
        .bind(group.end_time)
        .bind(&group.teacher_name)
        .bind(&group.teacher_phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbError> {
        let group = sqlx::query_as::<_, Group>(&format!(
            "SELECT {GROUP_COLUMNS} FROM groups WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }

    async fn find_all(&self) -> Result<Vec<Group>, DbError> {
        let groups = sqlx::query_as::<_, Group>(&format!(
            "SELECT {GROUP_COLUMNS} FROM groups ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(groups)
    }

    async fn search_by_subject(&self, query: &SubjectQuery) -> Result<Vec<Group>, DbError> {
        let groups = sqlx::query_as::<_, Group>(&format!(
            r#"
            SELECT {GROUP_COLUMNS}
            FROM groups
            WHERE subject ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#
        ))
        .bind(query.like_pattern())
        .fetch_all(&self.pool)
        .await?;

        Ok(groups)
    }

    async fn update_by_id(&self, id: i32, patch: GroupPatch) -> Result<Option<Group>, DbError> {
        let group = sqlx::query_as::<_, Group>(&format!(
            r#"
            UPDATE groups SET
                subject = COALESCE($2, subject),
                days = COALESCE($3, days),
                start_time = COALESCE($4, start_time),
                end_time = COALESCE($5, end_time),
                teacher_name = COALESCE($6, teacher_name),
                teacher_phone = COALESCE($7, teacher_phone),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {GROUP_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.subject)
        .bind(patch.days)
        .bind(patch.start_time)
        .bind(patch.end_time)
        .bind(patch.teacher_name)
        .bind(patch.teacher_phone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};
    use chrono::NaiveTime;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p crm-server -- --ignored

    async fn repo() -> PgGroupRepo {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgGroupRepo::new(pool)
    }

    fn new_group(subject: &str) -> NewGroup {
        NewGroup {
            subject: subject.into(),
            days: "Tue/Thu".into(),
            start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
            teacher_name: "Test Teacher".into(),
            teacher_phone: "+10000000000".into(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_update_then_delete() {
        let repo = repo().await;
        let created = repo.create(new_group("Geometry")).await.unwrap();
        assert_eq!(created.subject, "Geometry");

        let patch = GroupPatch {
            days: Some("Sat".into()),
            ..Default::default()
        };
        let updated = repo.update_by_id(created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.days, "Sat");
        assert_eq!(updated.subject, "Geometry");

        assert!(repo.delete_by_id(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_treats_wildcards_literally() {
        let repo = repo().await;
        let a = repo.create(new_group("Stats 100% pass")).await.unwrap();
        let b = repo.create(new_group("Stats 1000 pass")).await.unwrap();

        let q = SubjectQuery::new(Some("100%")).unwrap();
        let found = repo.search_by_subject(&q).await.unwrap();
        assert!(found.iter().any(|g| g.id == a.id));
        assert!(!found.iter().any(|g| g.id == b.id));

        repo.delete_by_id(a.id).await.unwrap();
        repo.delete_by_id(b.id).await.unwrap();
    }
}
