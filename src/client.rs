//! Thin HTTP client for the dashboard binary. Session state lives in the
//! reqwest cookie store, so a successful login carries over to every
//! subsequent fetch.

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultySummary {
    pub id: Uuid,
    pub name: String,
    pub rank: String,
    pub department: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub year: String,
    pub semester: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub id: Uuid,
    pub name: String,
    pub student_id: String,
    pub year: String,
    pub semester: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub start_date: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub id: Uuid,
    pub student_id: Uuid,
    pub activity_id: Uuid,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabSummary {
    pub id: Uuid,
    pub name: String,
    pub lab_day: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSummary {
    pub id: Uuid,
    pub title: String,
    pub exam_date: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialSummary {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub material_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSummary {
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub course_id: Uuid,
    pub academic_year: String,
}

/// Everything the dashboard shows. Produced only when all ten fetches
/// succeed; one failure aborts the whole load.
#[derive(Debug)]
pub struct DashboardOverview {
    pub faculty: Vec<FacultySummary>,
    pub courses: Vec<CourseSummary>,
    pub students: Vec<StudentSummary>,
    pub groups: Vec<GroupSummary>,
    pub activities: Vec<ActivitySummary>,
    pub attendance: Vec<AttendanceSummary>,
    pub labs: Vec<LabSummary>,
    pub exams: Vec<ExamSummary>,
    pub materials: Vec<MaterialSummary>,
    pub schedule: Vec<AssignmentSummary>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    /// Logs in and keeps the session cookie for later calls.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSummary> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .context("Login request failed")?;

        if !response.status().is_success() {
            bail!("Login rejected with status {}", response.status());
        }
        let user = response.json().await.context("Malformed login response")?;
        Ok(user)
    }

    async fn fetch_list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .with_context(|| format!("Request to {path} failed"))?;

        if !response.status().is_success() {
            bail!("{path} returned status {}", response.status());
        }
        let rows = response
            .json()
            .await
            .with_context(|| format!("Malformed response from {path}"))?;
        Ok(rows)
    }

    pub async fn faculty(&self) -> Result<Vec<FacultySummary>> {
        self.fetch_list("/faculty").await
    }

    pub async fn courses(&self) -> Result<Vec<CourseSummary>> {
        self.fetch_list("/courses").await
    }

    pub async fn students(&self) -> Result<Vec<StudentSummary>> {
        self.fetch_list("/students").await
    }

    pub async fn groups(&self) -> Result<Vec<GroupSummary>> {
        self.fetch_list("/groups").await
    }

    pub async fn activities(&self) -> Result<Vec<ActivitySummary>> {
        self.fetch_list("/activities").await
    }

    pub async fn attendance(&self) -> Result<Vec<AttendanceSummary>> {
        self.fetch_list("/attendance").await
    }

    pub async fn labs(&self) -> Result<Vec<LabSummary>> {
        self.fetch_list("/labs").await
    }

    pub async fn exams(&self) -> Result<Vec<ExamSummary>> {
        self.fetch_list("/exams").await
    }

    pub async fn materials(&self) -> Result<Vec<MaterialSummary>> {
        self.fetch_list("/materials").await
    }

    pub async fn schedule(&self) -> Result<Vec<AssignmentSummary>> {
        self.fetch_list("/schedule").await
    }

    /// Fetches every collection concurrently. Returns the first error
    /// when any fetch fails, and no partial overview.
    pub async fn load_overview(&self) -> Result<DashboardOverview> {
        let (
            faculty,
            courses,
            students,
            groups,
            activities,
            attendance,
            labs,
            exams,
            materials,
            schedule,
        ) = tokio::try_join!(
            self.faculty(),
            self.courses(),
            self.students(),
            self.groups(),
            self.activities(),
            self.attendance(),
            self.labs(),
            self.exams(),
            self.materials(),
            self.schedule(),
        )?;

        Ok(DashboardOverview {
            faculty,
            courses,
            students,
            groups,
            activities,
            attendance,
            labs,
            exams,
            materials,
            schedule,
        })
    }
}
