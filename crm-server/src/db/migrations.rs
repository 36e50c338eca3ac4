//! Schema migrations
//!
//! Every statement is idempotent, so `run` is safe on each startup.

use sqlx::PgPool;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running CRM migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS groups (
            id SERIAL PRIMARY KEY,
            subject TEXT NOT NULL,
            days TEXT NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            teacher_name TEXT NOT NULL,
            teacher_phone TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id SERIAL PRIMARY KEY,
            full_name TEXT NOT NULL,
            phone TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendances (
            id SERIAL PRIMARY KEY,
            student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
            group_id INTEGER NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_attendances_group ON attendances(group_id)")
        .execute(pool)
        .await?;

    tracing::info!("CRM migrations complete");
    Ok(())
}
