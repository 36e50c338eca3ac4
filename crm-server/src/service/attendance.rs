//! Attendance marking for a group session
//!
//! Submissions are accepted only while the group's time window is open.
//! Entries are processed one at a time, in order. There is no transaction:
//! if a later student id is unknown the request fails with NotFound, but
//! records already inserted for earlier entries stay.

use crate::clock::{whole_seconds, Clock};
use crate::db::{AttendanceRepository, GroupRepository, StudentRepository};
use crate::models::{Attendance, AttendanceEntry, AttendanceStatus, StudentStatus};

use super::groups::GROUP;
use super::students::STUDENT;
use super::{ServiceError, ServiceResult};

pub const OUTSIDE_WINDOW_MESSAGE: &str = "You can not register students at this time!";

/// Repositories and clock needed to mark attendance
pub struct AttendanceDeps<'a> {
    pub groups: &'a dyn GroupRepository,
    pub students: &'a dyn StudentRepository,
    pub attendances: &'a dyn AttendanceRepository,
    pub clock: &'a dyn Clock,
}

pub async fn mark(
    deps: AttendanceDeps<'_>,
    group_id: i32,
    entries: &[AttendanceEntry],
) -> ServiceResult<Vec<StudentStatus>> {
    let group = deps
        .groups
        .find_by_id(group_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(GROUP, group_id))?;

    let now = whole_seconds(deps.clock.now_time());
    if !group.is_open_at(now) {
        tracing::warn!(
            group_id,
            %now,
            start = %group.start_time,
            end = %group.end_time,
            "attendance submitted outside group window"
        );
        return Err(ServiceError::BadRequest(OUTSIDE_WINDOW_MESSAGE.to_owned()));
    }

    let mut statuses = Vec::with_capacity(entries.len());
    for entry in entries {
        if deps.students.find_by_id(entry.student_id).await?.is_none() {
            tracing::warn!(
                group_id,
                student_id = entry.student_id,
                recorded = statuses.len(),
                "unknown student, aborting submission"
            );
            return Err(ServiceError::not_found(STUDENT, entry.student_id));
        }

        if entry.present {
            deps.attendances.create(entry.student_id, group_id).await?;
        }
        statuses.push(StudentStatus {
            student_id: entry.student_id,
            status: AttendanceStatus::from(entry.present),
        });
    }

    tracing::info!(group_id, count = statuses.len(), "attendance recorded");
    Ok(statuses)
}

/// Attendance records stored for a group.
pub async fn history(
    groups: &dyn GroupRepository,
    attendances: &dyn AttendanceRepository,
    group_id: i32,
) -> ServiceResult<Vec<Attendance>> {
    if groups.find_by_id(group_id).await?.is_none() {
        return Err(ServiceError::not_found(GROUP, group_id));
    }
    Ok(attendances.list_for_group(group_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::db::MemoryStore;
    use crate::models::{NewGroup, NewStudent};
    use chrono::NaiveTime;

    async fn seed(store: &MemoryStore, students: usize) -> i32 {
        for i in 0..students {
            StudentRepository::create(
                store,
                NewStudent {
                    full_name: format!("Student {i}"),
                    phone: None,
                },
            )
            .await
            .unwrap();
        }
        GroupRepository::create(
            store,
            NewGroup {
                subject: "Chemistry".into(),
                days: "Tue/Thu".into(),
                start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
                teacher_name: "K. Yusupova".into(),
                teacher_phone: "+998977777777".into(),
            },
        )
        .await
        .unwrap()
        .id
    }

    fn deps<'a>(store: &'a MemoryStore, clock: &'a FixedClock) -> AttendanceDeps<'a> {
        AttendanceDeps {
            groups: store,
            students: store,
            attendances: store,
            clock,
        }
    }

    fn entry(student_id: i32, present: bool) -> AttendanceEntry {
        AttendanceEntry { student_id, present }
    }

    #[tokio::test]
    async fn marks_present_and_absent() {
        let store = MemoryStore::new();
        let group_id = seed(&store, 2).await;
        let clock = FixedClock::at(15, 0);

        let entries = [entry(1, true), entry(2, false)];
        let statuses = mark(deps(&store, &clock), group_id, &entries)
            .await
            .unwrap();

        assert_eq!(
            statuses,
            vec![
                StudentStatus {
                    student_id: 1,
                    status: AttendanceStatus::Came,
                },
                StudentStatus {
                    student_id: 2,
                    status: AttendanceStatus::NotCome,
                },
            ]
        );
        let records = store.attendances().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].student_id, 1);
        assert_eq!(records[0].group_id, group_id);
    }

    #[tokio::test]
    async fn rejects_outside_window() {
        let store = MemoryStore::new();
        let group_id = seed(&store, 1).await;

        for clock in [FixedClock::at(13, 59), FixedClock::at(16, 1)] {
            let err = mark(deps(&store, &clock), group_id, &[entry(1, true)])
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                ServiceError::BadRequest(ref m) if m == OUTSIDE_WINDOW_MESSAGE
            ));
        }
        assert!(store.attendances().unwrap().is_empty());
    }

    #[tokio::test]
    async fn window_edges_are_open() {
        let store = MemoryStore::new();
        let group_id = seed(&store, 1).await;

        for clock in [FixedClock::at(14, 0), FixedClock::at(16, 0)] {
            let result = mark(deps(&store, &clock), group_id, &[entry(1, true)]).await;
            assert!(result.is_ok());
        }
        assert_eq!(store.attendances().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn fraction_of_final_second_is_inside_window() {
        let store = MemoryStore::new();
        let group_id = seed(&store, 1).await;
        let clock = FixedClock(NaiveTime::from_hms_milli_opt(16, 0, 0, 400).unwrap());

        let statuses = mark(deps(&store, &clock), group_id, &[entry(1, true)])
            .await
            .unwrap();
        assert_eq!(statuses[0].status, AttendanceStatus::Came);
        assert_eq!(store.attendances().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_group_is_not_found() {
        let store = MemoryStore::new();
        let clock = FixedClock::at(15, 0);
        let err = mark(deps(&store, &clock), 77, &[]).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { resource: "group", .. }));
    }

    #[tokio::test]
    async fn unknown_student_keeps_earlier_records() {
        let store = MemoryStore::new();
        let group_id = seed(&store, 3).await;
        let clock = FixedClock::at(15, 0);

        let entries = [entry(1, true), entry(2, true), entry(99, true), entry(3, true)];
        let err = mark(deps(&store, &clock), group_id, &entries).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::NotFound { resource: "student", ref id } if id == "99"
        ));
        let students: Vec<i32> = store
            .attendances()
            .unwrap()
            .iter()
            .map(|a| a.student_id)
            .collect();
        assert_eq!(students, vec![1, 2]);
    }

    #[tokio::test]
    async fn history_lists_group_records() {
        let store = MemoryStore::new();
        let group_id = seed(&store, 2).await;
        let clock = FixedClock::at(15, 0);
        mark(deps(&store, &clock), group_id, &[entry(1, true), entry(2, true)])
            .await
            .unwrap();

        let records = history(&store, &store, group_id).await.unwrap();
        assert_eq!(records.len(), 2);
        assert!(matches!(
            history(&store, &store, 500).await,
            Err(ServiceError::NotFound { .. })
        ));
    }
}
