//! Student records
//!
//! Attendance only needs to know a student exists; the remaining fields
//! exist so students can be registered through the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub phone: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Create student request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}
