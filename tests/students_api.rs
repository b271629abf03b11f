mod common;

use http::StatusCode;
use serde_json::json;

#[test]
fn mutations_require_a_session() {
    common::run(|| async {
        let app = common::app().await;
        let (status, body) = common::request(
            &app,
            "POST",
            "/students",
            None,
            Some(json!({
                "name": "No Session",
                "studentId": "9999-0000",
                "year": "2025",
                "semester": 1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(common::error_message(&body), "Unauthorized");
    });
}

#[test]
fn create_requires_all_mandatory_fields() {
    common::run(|| async {
        let app = common::app().await;
        let cookie = common::admin_session(&app).await;

        let (status, body) = common::request(
            &app,
            "POST",
            "/students",
            Some(&cookie),
            Some(json!({ "name": "Missing Fields" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            common::error_message(&body),
            "Name, student ID, year, and semester are required"
        );
    });
}

#[test]
fn student_lifecycle_and_duplicate_keys() {
    common::run(|| async {
        let app = common::app().await;
        let cookie = common::admin_session(&app).await;

        let (status, created) = common::request(
            &app,
            "POST",
            "/students",
            Some(&cookie),
            Some(json!({
                "name": "Lina Mahmoud",
                "studentId": "2025-0142",
                "email": "lina@example.edu",
                "year": "2025",
                "semester": 1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["studentId"], "2025-0142");
        assert!(created.get("password").is_none());
        let id = created["id"].as_str().expect("student id").to_string();

        // Same student number again
        let (status, body) = common::request(
            &app,
            "POST",
            "/students",
            Some(&cookie),
            Some(json!({
                "name": "Other Student",
                "studentId": "2025-0142",
                "year": "2025",
                "semester": 1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(common::error_message(&body), "Student ID already exists");

        // Same email, different number
        let (status, body) = common::request(
            &app,
            "POST",
            "/students",
            Some(&cookie),
            Some(json!({
                "name": "Other Student",
                "studentId": "2025-0143",
                "email": "lina@example.edu",
                "year": "2025",
                "semester": 1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(common::error_message(&body), "Email already exists");

        // The failed writes left nothing behind
        let (status, list) = common::request(&app, "GET", "/students", None, None).await;
        assert_eq!(status, StatusCode::OK);
        let matching = list
            .as_array()
            .expect("list body")
            .iter()
            .filter(|s| s["studentId"].as_str().unwrap_or("").starts_with("2025-014"))
            .count();
        assert_eq!(matching, 1);

        let (status, fetched) =
            common::request(&app, "GET", &format!("/students/{id}"), None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], "Lina Mahmoud");

        let (status, updated) = common::request(
            &app,
            "PUT",
            &format!("/students/{id}"),
            Some(&cookie),
            Some(json!({
                "name": "Lina M. Mahmoud",
                "email": "lina@example.edu"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Lina M. Mahmoud");
        // Keeping its own email is not a conflict
        assert_eq!(updated["email"], "lina@example.edu");

        let (status, body) = common::request(
            &app,
            "DELETE",
            &format!("/students/{id}"),
            Some(&cookie),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Student deleted successfully");

        let (status, body) =
            common::request(&app, "GET", &format!("/students/{id}"), None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(common::error_message(&body), "Student not found");
    });
}
