//! Student endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{NewStudent, Student};
use crate::service::students;

/// POST /students
async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewStudent>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let student = students::create(state.students.as_ref(), req).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /students/{id}
async fn get_student(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Student>, ApiError> {
    Ok(Json(students::get(state.students.as_ref(), id).await?))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/students", post(create_student))
        .route("/students/{id}", get(get_student))
}
