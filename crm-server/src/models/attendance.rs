//! Attendance marking types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted evidence that a student was marked present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendance {
    pub id: i32,
    #[serde(rename = "studentId")]
    pub student_id: i32,
    #[serde(rename = "groupId")]
    pub group_id: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// One line of an attendance submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    #[serde(rename = "studentId")]
    pub student_id: i32,
    pub present: bool,
}

/// Attendance submission body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendance {
    pub attendances: Vec<AttendanceEntry>,
}

/// Outcome recorded for a single student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "Came")]
    Came,
    #[serde(rename = "Not come")]
    NotCome,
}

impl From<bool> for AttendanceStatus {
    fn from(present: bool) -> Self {
        if present {
            Self::Came
        } else {
            Self::NotCome
        }
    }
}

/// Per-student result, returned in submission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentStatus {
    #[serde(rename = "studentId")]
    pub student_id: i32,
    pub status: AttendanceStatus,
}
