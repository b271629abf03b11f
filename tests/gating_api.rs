mod common;

use axum::Router;
use http::StatusCode;
use serde_json::{Value, json};

/// Creates a course through the API and returns its id.
async fn create_course(app: &Router, cookie: &str, code: &str) -> String {
    let (status, body) = common::request(
        app,
        "POST",
        "/courses",
        Some(cookie),
        Some(json!({
            "code": code,
            "name": format!("Course {code}"),
            "hours": 3,
            "year": "2025",
            "semester": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("course id").to_string()
}

#[test]
fn lab_and_exam_mutations_are_admin_only() {
    common::run(|| async {
        let app = common::app().await;
        let admin_cookie = common::admin_session(&app).await;
        let member_cookie = common::member_session(&app, "gate.member@example.edu").await;
        let course_id = create_course(&app, &admin_cookie, "GATE101").await;

        let lab_payload = json!({
            "name": "Networks Lab A",
            "courseId": course_id,
            "labDay": "Tuesday",
            "startTime": "10:00",
            "endTime": "12:00"
        });

        let (status, body) =
            common::request(&app, "POST", "/labs", Some(&member_cookie), Some(lab_payload.clone()))
                .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(common::error_message(&body), "Only admins can create labs");

        let (status, lab) =
            common::request(&app, "POST", "/labs", Some(&admin_cookie), Some(lab_payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        let lab_id = lab["id"].as_str().expect("lab id").to_string();

        let (status, body) = common::request(
            &app,
            "PUT",
            &format!("/labs/{lab_id}"),
            Some(&member_cookie),
            Some(json!({ "name": "Renamed Lab" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(common::error_message(&body), "Only admins can update labs");

        let (status, body) = common::request(
            &app,
            "DELETE",
            &format!("/labs/{lab_id}"),
            Some(&member_cookie),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(common::error_message(&body), "Only admins can delete labs");

        let (status, body) = common::request(
            &app,
            "DELETE",
            &format!("/labs/{lab_id}"),
            Some(&admin_cookie),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], Value::Bool(true));

        let (status, body) = common::request(
            &app,
            "POST",
            "/exams",
            Some(&member_cookie),
            Some(json!({
                "title": "Final Exam",
                "courseId": course_id,
                "examDate": "2025-06-10T09:00:00",
                "examType": "final"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(common::error_message(&body), "Only admins can create exams");

        // Reads stay open to everyone
        let (status, _) = common::request(&app, "GET", "/labs", None, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = common::request(&app, "GET", "/exams", None, None).await;
        assert_eq!(status, StatusCode::OK);
    });
}

#[test]
fn materials_are_editable_by_admins_and_their_creator() {
    common::run(|| async {
        let app = common::app().await;
        let admin_cookie = common::admin_session(&app).await;
        let creator_cookie = common::member_session(&app, "mat.creator@example.edu").await;
        let other_cookie = common::member_session(&app, "mat.other@example.edu").await;
        let course_id = create_course(&app, &admin_cookie, "MAT201").await;

        let (status, material) = common::request(
            &app,
            "POST",
            "/materials",
            Some(&creator_cookie),
            Some(json!({
                "title": "Lecture 4 Slides",
                "courseId": course_id,
                "type": "slides"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let material_id = material["id"].as_str().expect("material id").to_string();

        let (status, body) = common::request(
            &app,
            "PUT",
            &format!("/materials/{material_id}"),
            Some(&other_cookie),
            Some(json!({ "title": "Hijacked" })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            common::error_message(&body),
            "Only admins and the creator can update materials"
        );

        let (status, updated) = common::request(
            &app,
            "PUT",
            &format!("/materials/{material_id}"),
            Some(&creator_cookie),
            Some(json!({ "title": "Lecture 4 Slides v2", "type": "slides" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["title"], "Lecture 4 Slides v2");

        let (status, body) = common::request(
            &app,
            "DELETE",
            &format!("/materials/{material_id}"),
            Some(&other_cookie),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            common::error_message(&body),
            "Only admins and the creator can delete materials"
        );

        let (status, body) = common::request(
            &app,
            "DELETE",
            &format!("/materials/{material_id}"),
            Some(&admin_cookie),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], Value::Bool(true));
    });
}

#[test]
fn writes_against_missing_references_create_nothing() {
    common::run(|| async {
        let app = common::app().await;
        let admin_cookie = common::admin_session(&app).await;

        let (status, body) = common::request(
            &app,
            "POST",
            "/labs",
            Some(&admin_cookie),
            Some(json!({
                "name": "Orphan Lab",
                "courseId": "00000000-0000-0000-0000-000000000000",
                "labDay": "Monday",
                "startTime": "08:00",
                "endTime": "10:00"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(common::error_message(&body), "Course not found");

        let (status, list) = common::request(&app, "GET", "/labs", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            list.as_array()
                .expect("list body")
                .iter()
                .all(|lab| lab["name"] != "Orphan Lab")
        );
    });
}
