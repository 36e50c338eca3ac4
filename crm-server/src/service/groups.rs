//! Group CRUD and search

use crate::db::GroupRepository;
use crate::models::{Group, GroupPatch, NewGroup, Page, Pagination, SubjectQuery};

use super::{ServiceError, ServiceResult};

pub const GROUP: &str = "group";

/// Message returned after a successful delete
pub const DELETED_MESSAGE: &str = "The group deleted successfully";

pub async fn create(repo: &dyn GroupRepository, new: NewGroup) -> ServiceResult<Group> {
    let group = repo.create(new).await?;
    tracing::info!(group_id = group.id, subject = %group.subject, "group created");
    Ok(group)
}

/// Load every group and slice out the requested page.
///
/// Cost is O(total groups) per call whatever the page size.
pub async fn list(repo: &dyn GroupRepository, page: Pagination) -> ServiceResult<Page<Group>> {
    let all = repo.find_all().await?;
    tracing::debug!(total = all.len(), page = page.page, limit = page.limit, "listing groups");
    Ok(page.paginate(all))
}

pub async fn get(repo: &dyn GroupRepository, id: i32) -> ServiceResult<Group> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(GROUP, id))
}

/// Partial update; the response reflects the persisted row.
pub async fn update(
    repo: &dyn GroupRepository,
    id: i32,
    patch: GroupPatch,
) -> ServiceResult<Group> {
    get(repo, id).await?;

    // Row may vanish between the lookup and the update
    let updated = repo
        .update_by_id(id, patch)
        .await?
        .ok_or_else(|| ServiceError::not_found(GROUP, id))?;

    tracing::info!(group_id = id, "group updated");
    Ok(updated)
}

pub async fn delete(repo: &dyn GroupRepository, id: i32) -> ServiceResult<()> {
    get(repo, id).await?;
    repo.delete_by_id(id).await?;
    tracing::info!(group_id = id, "group deleted");
    Ok(())
}

/// Case-insensitive substring search on subject. No matches is an empty list.
pub async fn search(
    repo: &dyn GroupRepository,
    raw_subject: Option<&str>,
) -> ServiceResult<Vec<Group>> {
    let query = SubjectQuery::new(raw_subject)?;
    let found = repo.search_by_subject(&query).await?;
    tracing::debug!(term = query.as_str(), count = found.len(), "group search");
    Ok(found)
}
