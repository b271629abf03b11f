use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use super::dto::{CreateStudentRequest, StudentResponse, UpdateStudentRequest};
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::{StudentRepository, StudentUpdate};
use crate::routes::common::{MessageResponse, claims_user_id, user_refs};

pub fn create_route() -> Router {
    Router::new()
        .route("/students", get(get_all_students))
        .route("/students", post(create_student))
        .route("/students/{id}", get(get_student))
        .route("/students/{id}", put(update_student))
        .route("/students/{id}", delete(delete_student))
}

/// Students newest first.
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "Students", body = [StudentResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_all_students() -> Result<(StatusCode, Json<Vec<StudentResponse>>), ApiError> {
    let students = StudentRepository::new()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch students", e))?;

    let refs = user_refs(students.iter().map(|s| s.created_by_id)).await?;

    let response = students
        .into_iter()
        .map(|s| {
            let created_by = s.created_by_id.and_then(|id| refs.get(&id).cloned());
            StudentResponse::shape(s, created_by)
        })
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Creates a student after checking both natural keys for duplicates.
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Missing fields or duplicate student ID/email"),
        (status = 401, description = "Unauthenticated"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn create_student(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;
    let student_repo = StudentRepository::new();

    let student_number = payload.student_id.unwrap_or_default();
    let existing = student_repo
        .find_by_student_number(&student_number)
        .await
        .map_err(|e| ApiError::internal("Failed to create student", e))?;
    if existing.is_some() {
        return Err(ApiError::bad_request("Student ID already exists"));
    }

    if let Some(email) = payload.email.as_deref().filter(|e| !e.is_empty()) {
        let existing = student_repo
            .find_by_email(email)
            .await
            .map_err(|e| ApiError::internal("Failed to create student", e))?;
        if existing.is_some() {
            return Err(ApiError::bad_request("Email already exists"));
        }
    }

    let student = student_repo
        .create(
            Uuid::new_v4(),
            payload.name.unwrap_or_default(),
            student_number,
            payload.email,
            payload.gender,
            payload.year.unwrap_or_default(),
            payload.semester.unwrap_or_default(),
            payload.section,
            payload.phone,
            payload.notes,
            claims_user_id(&claims),
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create student", e))?;

    let refs = user_refs([student.created_by_id]).await?;
    let created_by = student.created_by_id.and_then(|id| refs.get(&id).cloned());

    Ok((
        StatusCode::CREATED,
        Json(StudentResponse::shape(student, created_by)),
    ))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student record id")),
    responses(
        (status = 200, description = "Student", body = StudentResponse),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn get_student(
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student = StudentRepository::new()
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch student", e))?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    let refs = user_refs([student.created_by_id]).await?;
    let created_by = student.created_by_id.and_then(|id| refs.get(&id).cloned());

    Ok((
        StatusCode::OK,
        Json(StudentResponse::shape(student, created_by)),
    ))
}

/// Updates a student; both natural keys are re-checked excluding the
/// record under update.
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student record id")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Duplicate student ID/email"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn update_student(
    AuthClaims(_claims): AuthClaims,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let student_repo = StudentRepository::new();
    student_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Failed to update student", e))?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    if let Some(student_number) = payload.student_id.as_deref() {
        let conflict = student_repo
            .find_by_student_number(student_number)
            .await
            .map_err(|e| ApiError::internal("Failed to update student", e))?;
        if conflict.is_some_and(|c| c.id != id) {
            return Err(ApiError::bad_request("Student ID already exists"));
        }
    }

    if let Some(email) = payload.email.as_deref().filter(|e| !e.is_empty()) {
        let conflict = student_repo
            .find_by_email(email)
            .await
            .map_err(|e| ApiError::internal("Failed to update student", e))?;
        if conflict.is_some_and(|c| c.id != id) {
            return Err(ApiError::bad_request("Email already exists"));
        }
    }

    let student = student_repo
        .update(
            id,
            StudentUpdate {
                name: payload.name,
                student_id: payload.student_id,
                email: payload.email,
                gender: payload.gender,
                year: payload.year,
                semester: payload.semester,
                section: payload.section,
                phone: payload.phone,
                notes: payload.notes,
            },
        )
        .await
        .map_err(|e| ApiError::internal("Failed to update student", e))?;

    let refs = user_refs([student.created_by_id]).await?;
    let created_by = student.created_by_id.and_then(|id| refs.get(&id).cloned());

    Ok((
        StatusCode::OK,
        Json(StudentResponse::shape(student, created_by)),
    ))
}

/// Deletes the student with memberships and attendance rows atomically.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(("id" = Uuid, Path, description = "Student record id")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn delete_student(
    AuthClaims(_claims): AuthClaims,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let student_repo = StudentRepository::new();
    student_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete student", e))?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    student_repo
        .delete_with_children(id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete student", e))?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Student deleted successfully".to_string(),
        }),
    ))
}
