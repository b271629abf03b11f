mod common;

use axum::{
    Json, Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};

use acadesk::client::ApiClient;

/// Serves a router on an ephemeral local port and returns its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

#[test]
fn overview_loads_every_collection_after_login() {
    common::run(|| async {
        let app = common::app().await;
        let cookie = common::admin_session(&app).await;
        let (status, _) = common::request(
            &app,
            "POST",
            "/faculty",
            Some(&cookie),
            Some(json!({ "name": "Dr. Overview Fixture", "rank": "Lecturer" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let base_url = serve(app).await;
        let client = ApiClient::new(&base_url).expect("build client");
        let user = client
            .login(common::ADMIN_EMAIL, common::ADMIN_PASSWORD)
            .await
            .expect("login");
        assert_eq!(user.role, "admin");

        let overview = client.load_overview().await.expect("load overview");
        assert!(
            overview
                .faculty
                .iter()
                .any(|f| f.name == "Dr. Overview Fixture")
        );
        assert!(overview.attendance.is_empty());
        assert!(overview.schedule.is_empty());
    });
}

/// A stand-in upstream where exactly one collection endpoint fails.
fn flaky_router() -> Router {
    async fn login() -> impl IntoResponse {
        (
            [(header::SET_COOKIE, "session_token=stub; HttpOnly; Path=/")],
            Json(json!({
                "id": "00000000-0000-0000-0000-000000000001",
                "email": "admin@example.edu",
                "name": "Stub Admin",
                "role": "admin"
            })),
        )
    }
    async fn empty_list() -> Json<Value> {
        Json(json!([]))
    }
    async fn broken() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    Router::new()
        .route("/auth/login", post(login))
        .route("/faculty", get(empty_list))
        .route("/courses", get(empty_list))
        .route("/students", get(empty_list))
        .route("/groups", get(empty_list))
        .route("/activities", get(empty_list))
        .route("/attendance", get(empty_list))
        .route("/labs", get(empty_list))
        .route("/exams", get(broken))
        .route("/materials", get(empty_list))
        .route("/schedule", get(empty_list))
}

#[test]
fn one_failing_collection_aborts_the_whole_overview() {
    common::run(|| async {
        let base_url = serve(flaky_router()).await;
        let client = ApiClient::new(&base_url).expect("build client");
        client
            .login("admin@example.edu", "irrelevant")
            .await
            .expect("stub login");

        let error = client
            .load_overview()
            .await
            .expect_err("overview must not load partially");
        assert!(error.to_string().contains("/exams"));
    });
}
