//! Group records and request payloads
//!
//! JSON field names follow the CRM's existing wire format, which mixes
//! camelCase (`startTime`) and snake_case (`teacher_name`).

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::time_of_day;
use super::ValidationError;

/// A scheduled class/course group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Group {
    pub id: i32,
    pub subject: String,
    pub days: String,
    #[serde(rename = "startTime", with = "time_of_day")]
    pub start_time: NaiveTime,
    #[serde(rename = "endTime", with = "time_of_day")]
    pub end_time: NaiveTime,
    pub teacher_name: String,
    pub teacher_phone: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Whether `now` falls inside `[start_time, end_time]`, bounds inclusive.
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        self.start_time <= now && now <= self.end_time
    }

    /// Apply a partial update in place. Absent fields are left untouched.
    pub fn apply(&mut self, patch: &GroupPatch) {
        if let Some(subject) = &patch.subject {
            self.subject = subject.clone();
        }
        if let Some(days) = &patch.days {
            self.days = days.clone();
        }
        if let Some(start) = patch.start_time {
            self.start_time = start;
        }
        if let Some(end) = patch.end_time {
            self.end_time = end;
        }
        if let Some(name) = &patch.teacher_name {
            self.teacher_name = name.clone();
        }
        if let Some(phone) = &patch.teacher_phone {
            self.teacher_phone = phone.clone();
        }
    }
}

/// Create group request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGroup {
    pub subject: String,
    pub days: String,
    #[serde(rename = "startTime", with = "time_of_day")]
    pub start_time: NaiveTime,
    #[serde(rename = "endTime", with = "time_of_day")]
    pub end_time: NaiveTime,
    pub teacher_name: String,
    pub teacher_phone: String,
}

/// Update group request; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<String>,
    #[serde(
        rename = "startTime",
        default,
        skip_serializing_if = "Option::is_none",
        with = "time_of_day::option"
    )]
    pub start_time: Option<NaiveTime>,
    #[serde(
        rename = "endTime",
        default,
        skip_serializing_if = "Option::is_none",
        with = "time_of_day::option"
    )]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_phone: Option<String>,
}

/// Validated subject search term (non-empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectQuery(String);

impl SubjectQuery {
    /// Build a search term from the raw `subject` query parameter.
    ///
    /// Missing and empty values are both rejected.
    pub fn new(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            Some(s) if !s.is_empty() => Ok(Self(s.to_owned())),
            _ => Err(ValidationError::Empty { field: "subject" }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match, the in-process equivalent of ILIKE.
    pub fn matches(&self, subject: &str) -> bool {
        subject.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// ILIKE pattern with `%`, `_` and `\` escaped so the term matches literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
