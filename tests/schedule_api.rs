mod common;

use axum::Router;
use http::StatusCode;
use serde_json::{Value, json};

async fn create_faculty(app: &Router, cookie: &str, name: &str) -> String {
    let (status, body) = common::request(
        app,
        "POST",
        "/faculty",
        Some(cookie),
        Some(json!({ "name": name, "rank": "Lecturer" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().expect("faculty id").to_string()
}

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

async fn assignments_for_year(app: &Router, year: &str) -> Vec<Value> {
    let (status, body) =
        common::request(app, "GET", &format!("/schedule?year={year}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().expect("list body").clone()
}

#[test]
fn schedule_rejects_duplicate_triples_and_missing_references() {
    common::run(|| async {
        let app = common::app().await;
        let cookie = common::admin_session(&app).await;
        let faculty_id = create_faculty(&app, &cookie, "Dr. Samir Haddad").await;
        let course_id = create_course(&app, &cookie, "SCHED301").await;

        let payload = json!({
            "facultyId": faculty_id,
            "courseId": course_id,
            "academicYear": "2031-2032"
        });

        let (status, created) =
            common::request(&app, "POST", "/schedule", Some(&cookie), Some(payload.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["course"]["code"], "SCHED301");
        assert_eq!(created["facultyMember"]["name"], "Dr. Samir Haddad");

        let (status, body) =
            common::request(&app, "POST", "/schedule", Some(&cookie), Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            common::error_message(&body),
            "This course is already assigned to this faculty member for this year"
        );
        assert_eq!(assignments_for_year(&app, "2031-2032").await.len(), 1);

        // Unknown course leaves the store untouched
        let (status, body) = common::request(
            &app,
            "POST",
            "/schedule",
            Some(&cookie),
            Some(json!({
                "facultyId": faculty_id,
                "courseId": "00000000-0000-0000-0000-000000000000",
                "academicYear": "2031-2032"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(common::error_message(&body), "Course not found");
        assert_eq!(assignments_for_year(&app, "2031-2032").await.len(), 1);

        let assignment_id = created["id"].as_str().expect("assignment id");
        let (status, body) = common::request(
            &app,
            "DELETE",
            &format!("/schedule/{assignment_id}"),
            Some(&cookie),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], Value::Bool(true));
        assert!(assignments_for_year(&app, "2031-2032").await.is_empty());
    });
}

#[test]
fn deleting_a_faculty_member_cascades_its_assignments() {
    common::run(|| async {
        let app = common::app().await;
        let cookie = common::admin_session(&app).await;
        let faculty_id = create_faculty(&app, &cookie, "Dr. Cascade Target").await;
        let course_a = create_course(&app, &cookie, "CASC401").await;
        let course_b = create_course(&app, &cookie, "CASC402").await;

        for course_id in [&course_a, &course_b] {
            let (status, _) = common::request(
                &app,
                "POST",
                "/schedule",
                Some(&cookie),
                Some(json!({
                    "facultyId": faculty_id,
                    "courseId": course_id,
                    "academicYear": "2033-2034"
                })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }
        assert_eq!(assignments_for_year(&app, "2033-2034").await.len(), 2);

        let (status, body) = common::request(
            &app,
            "DELETE",
            &format!("/faculty/{faculty_id}"),
            Some(&cookie),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], Value::Bool(true));

        assert!(assignments_for_year(&app, "2033-2034").await.is_empty());

        let (status, body) =
            common::request(&app, "GET", &format!("/faculty/{faculty_id}"), None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(common::error_message(&body), "Faculty member not found");
    });
}

#[test]
fn semester_filter_applies_to_the_assigned_course() {
    common::run(|| async {
        let app = common::app().await;
        let cookie = common::admin_session(&app).await;
        let faculty_id = create_faculty(&app, &cookie, "Dr. Filter Case").await;

        // Second-semester course in an otherwise first-semester year
        let (status, course) = common::request(
            &app,
            "POST",
            "/courses",
            Some(&cookie),
            Some(json!({
                "code": "SCHED502",
                "name": "Course SCHED502",
                "hours": 2,
                "year": "2025",
                "semester": 2
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let course_id = course["id"].as_str().expect("course id");

        let (status, _) = common::request(
            &app,
            "POST",
            "/schedule",
            Some(&cookie),
            Some(json!({
                "facultyId": faculty_id,
                "courseId": course_id,
                "academicYear": "2035-2036"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, filtered) = common::request(
            &app,
            "GET",
            "/schedule?year=2035-2036&semester=2",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(filtered.as_array().expect("list body").len(), 1);

        let (status, filtered) = common::request(
            &app,
            "GET",
            "/schedule?year=2035-2036&semester=1",
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(filtered.as_array().expect("list body").is_empty());
    });
}
