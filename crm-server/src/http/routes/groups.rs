//! Group endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{Group, GroupPatch, NewGroup, Page, Pagination, PaginationParams};
use crate::service::groups;

/// Search query parameters
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub subject: Option<String>,
}

/// Confirmation body for deletes
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /groups - create a group
async fn create_group(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewGroup>,
) -> Result<(StatusCode, Json<Group>), ApiError> {
    let group = groups::create(state.groups.as_ref(), req).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// GET /groups - list groups with pagination
async fn list_groups(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<Group>>, ApiError> {
    let page = groups::list(state.groups.as_ref(), Pagination::from(params)).await?;
    Ok(Json(page))
}

/// GET /groups/{id}
async fn get_group(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Group>, ApiError> {
    Ok(Json(groups::get(state.groups.as_ref(), id).await?))
}

/// PUT|PATCH /groups/{id} - partial update
async fn update_group(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Json(patch): Json<GroupPatch>,
) -> Result<Json<Group>, ApiError> {
    Ok(Json(groups::update(state.groups.as_ref(), id, patch).await?))
}

/// DELETE /groups/{id}
async fn delete_group(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    groups::delete(state.groups.as_ref(), id).await?;
    Ok(Json(MessageResponse {
        message: groups::DELETED_MESSAGE,
    }))
}

/// GET /groups/search?subject=
async fn search_groups(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Group>>, ApiError> {
    let found = groups::search(state.groups.as_ref(), params.subject.as_deref()).await?;
    Ok(Json(found))
}

/// Group routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/groups", get(list_groups).post(create_group))
        .route("/groups/search", get(search_groups))
        .route(
            "/groups/{id}",
            get(get_group)
                .put(update_group)
                .patch(update_group)
                .delete(delete_group),
        )
}
