//! In-memory store implementing every repository trait
//!
//! Used by tests and by `crm serve --in-memory`. Ids are assigned from
//! per-table counters starting at 1, like SERIAL columns.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use super::repos::{AttendanceRepository, DbError, GroupRepository, StudentRepository};
use crate::models::{Attendance, Group, GroupPatch, NewGroup, NewStudent, Student, SubjectQuery};

#[derive(Default)]
struct Tables {
    groups: BTreeMap<i32, Group>,
    students: BTreeMap<i32, Student>,
    attendances: Vec<Attendance>,
    next_group_id: i32,
    next_student_id: i32,
    next_attendance_id: i32,
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

/// Thread-safe in-process store
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DbError> {
        self.tables
            .read()
            .map_err(|_| DbError::Unavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DbError> {
        self.tables
            .write()
            .map_err(|_| DbError::Unavailable("memory store lock poisoned".into()))
    }

    /// Every attendance record, in insertion order.
    pub fn attendances(&self) -> Result<Vec<Attendance>, DbError> {
        Ok(self.read()?.attendances.clone())
    }
}

#[async_trait]
impl GroupRepository for MemoryStore {
    async fn create(&self, group: NewGroup) -> Result<Group, DbError> {
        let mut tables = self.write()?;
        let id = next_id(&mut tables.next_group_id);
        let now = Utc::now();
        let created = Group {
            id,
            subject: group.subject,
            days: group.days,
            start_time: group.start_time,
            end_time: group.end_time,
            teacher_name: group.teacher_name,
            teacher_phone: group.teacher_phone,
            created_at: now,
            updated_at: now,
        };
        tables.groups.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbError> {
        Ok(self.read()?.groups.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Group>, DbError> {
        Ok(self.read()?.groups.values().cloned().collect())
    }

    async fn search_by_subject(&self, query: &SubjectQuery) -> Result<Vec<Group>, DbError> {
        Ok(self
            .read()?
            .groups
            .values()
            .filter(|g| query.matches(&g.subject))
            .cloned()
            .collect())
    }

    async fn update_by_id(&self, id: i32, patch: GroupPatch) -> Result<Option<Group>, DbError> {
        let mut tables = self.write()?;
        Ok(tables.groups.get_mut(&id).map(|group| {
            group.apply(&patch);
            group.updated_at = Utc::now();
            group.clone()
        }))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, DbError> {
        let mut tables = self.write()?;
        let removed = tables.groups.remove(&id).is_some();
        if removed {
            // ON DELETE CASCADE
            tables.attendances.retain(|a| a.group_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl StudentRepository for MemoryStore {
    async fn create(&self, student: NewStudent) -> Result<Student, DbError> {
        let mut tables = self.write()?;
        let id = next_id(&mut tables.next_student_id);
        let created = Student {
            id,
            full_name: student.full_name,
            phone: student.phone,
            created_at: Utc::now(),
        };
        tables.students.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbError> {
        Ok(self.read()?.students.get(&id).cloned())
    }
}

#[async_trait]
impl AttendanceRepository for MemoryStore {
    async fn create(&self, student_id: i32, group_id: i32) -> Result<Attendance, DbError> {
        let mut tables = self.write()?;
        let id = next_id(&mut tables.next_attendance_id);
        let record = Attendance {
            id,
            student_id,
            group_id,
            created_at: Utc::now(),
        };
        tables.attendances.push(record.clone());
        Ok(record)
    }

    async fn list_for_group(&self, group_id: i32) -> Result<Vec<Attendance>, DbError> {
        Ok(self
            .read()?
            .attendances
            .iter()
            .filter(|a| a.group_id == group_id)
            .cloned()
            .collect())
    }
}
