//! Attendance endpoints

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{Attendance, MarkAttendance, StudentStatus};
use crate::service::attendance::{self, AttendanceDeps};

/// POST /groups/{id}/attendances - mark students for the current session
async fn mark_attendance(
    State(state): State<Arc<AppState>>,
    ValidId(group_id): ValidId,
    Json(req): Json<MarkAttendance>,
) -> Result<Json<Vec<StudentStatus>>, ApiError> {
    let deps = AttendanceDeps {
        groups: state.groups.as_ref(),
        students: state.students.as_ref(),
        attendances: state.attendances.as_ref(),
        clock: state.clock.as_ref(),
    };
    let statuses = attendance::mark(deps, group_id, &req.attendances).await?;
    Ok(Json(statuses))
}

/// GET /groups/{id}/attendances - records stored for the group
async fn list_attendance(
    State(state): State<Arc<AppState>>,
    ValidId(group_id): ValidId,
) -> Result<Json<Vec<Attendance>>, ApiError> {
    let records = attendance::history(
        state.groups.as_ref(),
        state.attendances.as_ref(),
        group_id,
    )
    .await?;
    Ok(Json(records))
}

/// Attendance routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/groups/{id}/attendances",
        post(mark_attendance).get(list_attendance),
    )
}
