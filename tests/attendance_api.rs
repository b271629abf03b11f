mod common;

use axum::Router;
use http::StatusCode;
use serde_json::json;

async fn create_student(app: &Router, cookie: &str, number: &str) -> String {
    let (status, body) = common::request(
        app,
        "POST",
        "/students",
        Some(cookie),
        Some(json!({
            "name": format!("Student {number}"),
            "studentId": number,
            "year": "2025",
            "semester": 1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("student id").to_string()
}

async fn create_activity(app: &Router, cookie: &str, title: &str) -> String {
    let (status, body) = common::request(
        app,
        "POST",
        "/activities",
        Some(cookie),
        Some(json!({
            "title": title,
            "type": "seminar",
            "startDate": "2025-10-01T09:00:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("activity id").to_string()
}

#[test]
fn double_post_keeps_a_single_row_with_the_latest_status() {
    common::run(|| async {
        let app = common::app().await;
        let cookie = common::admin_session(&app).await;
        let student_id = create_student(&app, &cookie, "ATT-0001").await;
        let activity_id = create_activity(&app, &cookie, "Attendance Seminar").await;

        let (status, first) = common::request(
            &app,
            "POST",
            "/attendance",
            Some(&cookie),
            Some(json!({
                "studentId": student_id,
                "activityId": activity_id,
                "status": "present"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(first["status"], "present");

        let (status, second) = common::request(
            &app,
            "POST",
            "/attendance",
            Some(&cookie),
            Some(json!({
                "studentId": student_id,
                "activityId": activity_id,
                "status": "late",
                "notes": "arrived 20 minutes in"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second["status"], "late");
        assert_eq!(second["id"], first["id"]);

        let (status, list) = common::request(
            &app,
            "GET",
            &format!("/attendance?activityId={activity_id}&studentId={student_id}"),
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let rows = list.as_array().expect("list body");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["status"], "late");
        assert_eq!(rows[0]["student"]["studentId"], "ATT-0001");
    });
}

#[test]
fn record_validation_and_reference_checks() {
    common::run(|| async {
        let app = common::app().await;
        let cookie = common::admin_session(&app).await;
        let activity_id = create_activity(&app, &cookie, "Validation Seminar").await;

        let (status, body) = common::request(
            &app,
            "POST",
            "/attendance",
            Some(&cookie),
            Some(json!({ "activityId": activity_id })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            common::error_message(&body),
            "Student ID, activity ID, and status are required"
        );

        let student_id = create_student(&app, &cookie, "ATT-0002").await;
        let (status, body) = common::request(
            &app,
            "POST",
            "/attendance",
            Some(&cookie),
            Some(json!({
                "studentId": student_id,
                "activityId": activity_id,
                "status": "asleep"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            common::error_message(&body),
            "Invalid status. Must be one of: present, absent, late, excused"
        );

        let (status, body) = common::request(
            &app,
            "POST",
            "/attendance",
            Some(&cookie),
            Some(json!({
                "studentId": "00000000-0000-0000-0000-000000000000",
                "activityId": activity_id,
                "status": "present"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(common::error_message(&body), "Student not found");

        // None of the failed writes stuck
        let (status, list) = common::request(
            &app,
            "GET",
            &format!("/attendance?activityId={activity_id}"),
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(list.as_array().expect("list body").is_empty());
    });
}

#[test]
fn pair_addressing_for_update_and_delete() {
    common::run(|| async {
        let app = common::app().await;
        let cookie = common::admin_session(&app).await;
        let student_id = create_student(&app, &cookie, "ATT-0003").await;
        let activity_id = create_activity(&app, &cookie, "Pair Seminar").await;

        let (status, _) = common::request(
            &app,
            "POST",
            "/attendance",
            Some(&cookie),
            Some(json!({
                "studentId": student_id,
                "activityId": activity_id,
                "status": "absent"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = common::request(
            &app,
            "PUT",
            "/attendance",
            Some(&cookie),
            Some(json!({ "status": "excused" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            common::error_message(&body),
            "Student ID and activity ID are required"
        );

        let (status, updated) = common::request(
            &app,
            "PUT",
            "/attendance",
            Some(&cookie),
            Some(json!({
                "studentId": student_id,
                "activityId": activity_id,
                "status": "excused",
                "notes": "medical note"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["status"], "excused");
        assert_eq!(updated["notes"], "medical note");

        let (status, body) = common::request(
            &app,
            "DELETE",
            &format!("/attendance?studentId={student_id}&activityId={activity_id}"),
            Some(&cookie),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Attendance record deleted successfully");

        let (status, body) = common::request(
            &app,
            "DELETE",
            &format!("/attendance?studentId={student_id}&activityId={activity_id}"),
            Some(&cookie),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(common::error_message(&body), "Attendance record not found");
    });
}
