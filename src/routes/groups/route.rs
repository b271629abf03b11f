use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use std::collections::HashMap;
use uuid::Uuid;

use super::dto::{CreateGroupRequest, GroupMemberRow, GroupResponse, UpdateGroupRequest};
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::{CourseRepository, GroupRepository, GroupUpdate};
use crate::routes::common::{CourseRef, MessageResponse, StudentRef, claims_user_id, user_refs};

pub fn create_route() -> Router {
    Router::new()
        .route("/groups", get(get_all_groups))
        .route("/groups", post(create_group))
        .route("/groups/{group_id}", get(get_group))
        .route("/groups/{group_id}", put(update_group))
        .route("/groups/{group_id}", delete(delete_group))
}

async fn course_refs(ids: Vec<Uuid>) -> Result<HashMap<Uuid, CourseRef>, ApiError> {
    let courses = CourseRepository::new()
        .find_by_ids(ids)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch courses", e))?;
    Ok(courses
        .into_iter()
        .map(|c| (c.id, CourseRef::from(c)))
        .collect())
}

async fn members_for(group_id: Uuid) -> Result<Vec<GroupMemberRow>, ApiError> {
    let members = GroupRepository::new()
        .members_with_students(group_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch groups", e))?;
    Ok(members
        .into_iter()
        .map(|(member, student)| GroupMemberRow {
            id: member.id,
            joined_at: member.joined_at,
            student: student.map(StudentRef::from),
        })
        .collect())
}

/// Groups newest first, each with course, creator and member projections.
#[utoipa::path(
    get,
    path = "/groups",
    responses(
        (status = 200, description = "Groups", body = [GroupResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Groups"
)]
pub async fn get_all_groups() -> Result<(StatusCode, Json<Vec<GroupResponse>>), ApiError> {
    let groups = GroupRepository::new()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch groups", e))?;

    let refs = user_refs(groups.iter().map(|g| g.created_by_id)).await?;
    let courses = course_refs(groups.iter().filter_map(|g| g.course_id).collect()).await?;

    let mut response = Vec::with_capacity(groups.len());
    for group in groups {
        let created_by = group.created_by_id.and_then(|id| refs.get(&id).cloned());
        let course = group.course_id.and_then(|id| courses.get(&id).cloned());
        let members = members_for(group.id).await?;
        response.push(GroupResponse::shape(group, created_by, course, members));
    }

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 201, description = "Group created", body = GroupResponse),
        (status = 400, description = "Missing group name"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Referenced course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Groups"
)]
pub async fn create_group(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;

    if let Some(course_id) = payload.course_id {
        CourseRepository::new()
            .find_by_id(course_id)
            .await
            .map_err(|e| ApiError::internal("Failed to create group", e))?
            .ok_or_else(|| ApiError::not_found("Course not found"))?;
    }

    let group = GroupRepository::new()
        .create(
            Uuid::new_v4(),
            payload.name.unwrap_or_default(),
            payload.description,
            payload.course_id,
            payload.year,
            payload.semester,
            payload.section,
            payload.max_size,
            claims_user_id(&claims),
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create group", e))?;

    let refs = user_refs([group.created_by_id]).await?;
    let created_by = group.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(group.course_id.into_iter().collect()).await?;
    let course = group.course_id.and_then(|id| courses.get(&id).cloned());

    Ok((
        StatusCode::CREATED,
        Json(GroupResponse::shape(group, created_by, course, Vec::new())),
    ))
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}",
    params(("group_id" = Uuid, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group", body = GroupResponse),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Groups"
)]
pub async fn get_group(
    Path(group_id): Path<Uuid>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    let group = GroupRepository::new()
        .find_by_id(group_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch group", e))?
        .ok_or_else(|| ApiError::not_found("Group not found"))?;

    let refs = user_refs([group.created_by_id]).await?;
    let created_by = group.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(group.course_id.into_iter().collect()).await?;
    let course = group.course_id.and_then(|id| courses.get(&id).cloned());
    let members = members_for(group.id).await?;

    Ok((
        StatusCode::OK,
        Json(GroupResponse::shape(group, created_by, course, members)),
    ))
}

#[utoipa::path(
    put,
    path = "/groups/{group_id}",
    params(("group_id" = Uuid, Path, description = "Group id")),
    request_body = UpdateGroupRequest,
    responses(
        (status = 200, description = "Group updated", body = GroupResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Group or referenced course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Groups"
)]
pub async fn update_group(
    AuthClaims(_claims): AuthClaims,
    Path(group_id): Path<Uuid>,
    Json(payload): Json<UpdateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    let group_repo = GroupRepository::new();
    group_repo
        .find_by_id(group_id)
        .await
        .map_err(|e| ApiError::internal("Failed to update group", e))?
        .ok_or_else(|| ApiError::not_found("Group not found"))?;

    if let Some(course_id) = payload.course_id {
        CourseRepository::new()
            .find_by_id(course_id)
            .await
            .map_err(|e| ApiError::internal("Failed to update group", e))?
            .ok_or_else(|| ApiError::not_found("Course not found"))?;
    }

    let group = group_repo
        .update(
            group_id,
            GroupUpdate {
                name: payload.name,
                description: payload.description,
                course_id: payload.course_id,
                year: payload.year,
                semester: payload.semester,
                section: payload.section,
                max_size: payload.max_size,
            },
        )
        .await
        .map_err(|e| ApiError::internal("Failed to update group", e))?;

    let refs = user_refs([group.created_by_id]).await?;
    let created_by = group.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(group.course_id.into_iter().collect()).await?;
    let course = group.course_id.and_then(|id| courses.get(&id).cloned());
    let members = members_for(group.id).await?;

    Ok((
        StatusCode::OK,
        Json(GroupResponse::shape(group, created_by, course, members)),
    ))
}

/// Deletes the group and its memberships atomically.
#[utoipa::path(
    delete,
    path = "/groups/{group_id}",
    params(("group_id" = Uuid, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group deleted", body = MessageResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Groups"
)]
pub async fn delete_group(
    AuthClaims(_claims): AuthClaims,
    Path(group_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let group_repo = GroupRepository::new();
    group_repo
        .find_by_id(group_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete group", e))?
        .ok_or_else(|| ApiError::not_found("Group not found"))?;

    group_repo
        .delete_with_members(group_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete group", e))?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Group deleted successfully".to_string(),
        }),
    ))
}
