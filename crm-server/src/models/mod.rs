//! Domain models and request/response payloads

pub mod attendance;
pub mod group;
pub mod pagination;
pub mod student;
pub mod time_of_day;
pub mod validation;

pub use attendance::{Attendance, AttendanceEntry, AttendanceStatus, MarkAttendance, StudentStatus};
pub use group::{Group, GroupPatch, NewGroup, SubjectQuery};
pub use pagination::{Page, PageLink, Pagination, PaginationParams};
pub use student::{NewStudent, Student};
pub use validation::ValidationError;
