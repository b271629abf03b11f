use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::{activity, course, faculty_member, schedule_assignment, student, user};
use crate::error::ApiError;
use crate::repositories::UserRepository;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Creator/updater projection. Whitelisted so the password column can
/// never leak into a response body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserRef {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
}

impl From<user::Model> for UserRef {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CourseRef {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

impl From<course::Model> for CourseRef {
    fn from(course: course::Model) -> Self {
        Self {
            id: course.id,
            code: course.code,
            name: course.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GroupRef {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    pub id: Uuid,
    pub name: String,
    pub student_id: String,
    pub email: Option<String>,
}

impl From<student::Model> for StudentRef {
    fn from(student: student::Model) -> Self {
        Self {
            id: student.id,
            name: student.name,
            student_id: student.student_id,
            email: student.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRef {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub start_date: NaiveDateTime,
}

impl From<activity::Model> for ActivityRef {
    fn from(activity: activity::Model) -> Self {
        Self {
            id: activity.id,
            title: activity.title,
            activity_type: activity.activity_type,
            start_date: activity.start_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FacultyRef {
    pub id: Uuid,
    pub name: String,
    pub rank: String,
    pub department: Option<String>,
}

impl From<faculty_member::Model> for FacultyRef {
    fn from(faculty: faculty_member::Model) -> Self {
        Self {
            id: faculty.id,
            name: faculty.name,
            rank: faculty.rank,
            department: faculty.department,
        }
    }
}

/// Raw schedule assignment row as nested in faculty and course responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRow {
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub course_id: Uuid,
    pub academic_year: String,
    pub created_at: NaiveDateTime,
}

impl From<schedule_assignment::Model> for AssignmentRow {
    fn from(assignment: schedule_assignment::Model) -> Self {
        Self {
            id: assignment.id,
            faculty_id: assignment.faculty_id,
            course_id: assignment.course_id,
            academic_year: assignment.academic_year,
            created_at: assignment.created_at,
        }
    }
}

/// Caller id for created_by/updated_by stamping. Claims carry the id as a
/// string; an unparseable id degrades to an unattributed write.
pub fn claims_user_id(claims: &crate::utils::jwt::TokenClaims) -> Option<Uuid> {
    Uuid::parse_str(&claims.user_id).ok()
}

/// Batch-resolves creator/updater ids to `UserRef`s for response shaping.
pub async fn user_refs(
    ids: impl IntoIterator<Item = Option<Uuid>>,
) -> Result<HashMap<Uuid, UserRef>, ApiError> {
    let mut wanted: Vec<Uuid> = ids.into_iter().flatten().collect();
    wanted.sort();
    wanted.dedup();

    let users = UserRepository::new()
        .find_by_ids(wanted)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch users", e))?;

    Ok(users.into_iter().map(|u| (u.id, UserRef::from(u))).collect())
}
