use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use std::collections::HashMap;
use uuid::Uuid;

use super::dto::{
    CreateMaterialRequest, MaterialListQuery, MaterialResponse, UpdateMaterialRequest,
};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::teaching_material;
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::{CourseRepository, MaterialFilter, MaterialRepository, MaterialUpdate};
use crate::routes::common::{CourseRef, SuccessResponse, claims_user_id, user_refs};
use crate::utils::jwt::TokenClaims;

pub fn create_route() -> Router {
    Router::new()
        .route("/materials", get(get_all_materials))
        .route("/materials", post(create_material))
        .route("/materials/{material_id}", get(get_material))
        .route("/materials/{material_id}", put(update_material))
        .route("/materials/{material_id}", delete(delete_material))
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

/// Admins may touch any material; other users only the ones they created.
fn can_modify(claims: &TokenClaims, material: &teaching_material::Model) -> bool {
    claims.role == RoleEnum::Admin
        || claims_user_id(claims).is_some_and(|id| material.created_by_id == Some(id))
}

/// Materials newest first, optionally filtered by course and section.
#[utoipa::path(
    get,
    path = "/materials",
    params(MaterialListQuery),
    responses(
        (status = 200, description = "Teaching materials", body = [MaterialResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Materials"
)]
pub async fn get_all_materials(
    Query(query): Query<MaterialListQuery>,
) -> Result<(StatusCode, Json<Vec<MaterialResponse>>), ApiError> {
    let materials = MaterialRepository::new()
        .find_all(MaterialFilter {
            course_id: query.course_id,
            section: query.section,
        })
        .await
        .map_err(|e| ApiError::internal("Failed to fetch teaching materials", e))?;

    let refs = user_refs(materials.iter().map(|m| m.created_by_id)).await?;
    let courses = course_refs(materials.iter().map(|m| m.course_id).collect()).await?;

    let response = materials
        .into_iter()
        .map(|m| {
            let created_by = m.created_by_id.and_then(|id| refs.get(&id).cloned());
            let course = courses.get(&m.course_id).cloned();
            MaterialResponse::shape(m, created_by, course)
        })
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/materials",
    request_body = CreateMaterialRequest,
    responses(
        (status = 201, description = "Teaching material created", body = MaterialResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Referenced course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Materials"
)]
pub async fn create_material(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateMaterialRequest>,
) -> Result<(StatusCode, Json<MaterialResponse>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;

    let course_id = payload.course_id.unwrap_or_default();
    CourseRepository::new()
        .find_by_id(course_id)
        .await
        .map_err(|e| ApiError::internal("Failed to create teaching material", e))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    let material = MaterialRepository::new()
        .create(
            Uuid::new_v4(),
            payload.title.unwrap_or_default(),
            course_id,
            payload.material_type.unwrap_or_default(),
            payload.description,
            payload.file_url,
            payload.external_url,
            payload.section,
            claims_user_id(&claims),
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create teaching material", e))?;

    let refs = user_refs([material.created_by_id]).await?;
    let created_by = material.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(vec![material.course_id]).await?;
    let course = courses.get(&material.course_id).cloned();

    Ok((
        StatusCode::CREATED,
        Json(MaterialResponse::shape(material, created_by, course)),
    ))
}

#[utoipa::path(
    get,
    path = "/materials/{material_id}",
    params(("material_id" = Uuid, Path, description = "Teaching material id")),
    responses(
        (status = 200, description = "Teaching material", body = MaterialResponse),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Materials"
)]
pub async fn get_material(
    Path(material_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MaterialResponse>), ApiError> {
    let material = MaterialRepository::new()
        .find_by_id(material_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch teaching materials", e))?
        .ok_or_else(|| ApiError::not_found("Teaching material not found"))?;

    let refs = user_refs([material.created_by_id]).await?;
    let created_by = material.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(vec![material.course_id]).await?;
    let course = courses.get(&material.course_id).cloned();

    Ok((
        StatusCode::OK,
        Json(MaterialResponse::shape(material, created_by, course)),
    ))
}

/// Admin or creator only.
#[utoipa::path(
    put,
    path = "/materials/{material_id}",
    params(("material_id" = Uuid, Path, description = "Teaching material id")),
    request_body = UpdateMaterialRequest,
    responses(
        (status = 200, description = "Teaching material updated", body = MaterialResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Not the admin or creator"),
        (status = 404, description = "Material or referenced course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Materials"
)]
pub async fn update_material(
    AuthClaims(claims): AuthClaims,
    Path(material_id): Path<Uuid>,
    Json(payload): Json<UpdateMaterialRequest>,
) -> Result<(StatusCode, Json<MaterialResponse>), ApiError> {
    let material_repo = MaterialRepository::new();
    let existing = material_repo
        .find_by_id(material_id)
        .await
        .map_err(|e| ApiError::internal("Failed to update teaching material", e))?
        .ok_or_else(|| ApiError::not_found("Teaching material not found"))?;

    if !can_modify(&claims, &existing) {
        return Err(ApiError::forbidden(
            "Only admins and the creator can update materials",
        ));
    }

    if let Some(course_id) = payload.course_id {
        CourseRepository::new()
            .find_by_id(course_id)
            .await
            .map_err(|e| ApiError::internal("Failed to update teaching material", e))?
            .ok_or_else(|| ApiError::not_found("Course not found"))?;
    }

    let material = material_repo
        .update(
            material_id,
            MaterialUpdate {
                title: payload.title,
                course_id: payload.course_id,
                material_type: payload.material_type,
                description: payload.description,
                file_url: payload.file_url,
                external_url: payload.external_url,
                section: payload.section,
            },
        )
        .await
        .map_err(|e| ApiError::internal("Failed to update teaching material", e))?;

    let refs = user_refs([material.created_by_id]).await?;
    let created_by = material.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(vec![material.course_id]).await?;
    let course = courses.get(&material.course_id).cloned();

    Ok((
        StatusCode::OK,
        Json(MaterialResponse::shape(material, created_by, course)),
    ))
}

/// Admin or creator only.
#[utoipa::path(
    delete,
    path = "/materials/{material_id}",
    params(("material_id" = Uuid, Path, description = "Teaching material id")),
    responses(
        (status = 200, description = "Teaching material deleted", body = SuccessResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Not the admin or creator"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Materials"
)]
pub async fn delete_material(
    AuthClaims(claims): AuthClaims,
    Path(material_id): Path<Uuid>,
) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let material_repo = MaterialRepository::new();
    let existing = material_repo
        .find_by_id(material_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete teaching material", e))?
        .ok_or_else(|| ApiError::not_found("Teaching material not found"))?;

    if !can_modify(&claims, &existing) {
        return Err(ApiError::forbidden(
            "Only admins and the creator can delete materials",
        ));
    }

    material_repo
        .delete(material_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete teaching material", e))?;

    Ok((StatusCode::OK, Json(SuccessResponse { success: true })))
}
