#![allow(dead_code)]

use std::future::Future;
use std::sync::Mutex;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use once_cell::sync::Lazy;
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use tower::ServiceExt;
use uuid::Uuid;

use acadesk::app::create_app;
use acadesk::entities::sea_orm_active_enums::RoleEnum;
use acadesk::repositories::UserRepository;
use acadesk::static_service::DATABASE_CONNECTION;
use migration::{Migrator, MigratorTrait};

pub const ADMIN_EMAIL: &str = "admin@example.edu";
pub const ADMIN_PASSWORD: &str = "admin-password";

static RUNTIME: Lazy<Runtime> = Lazy::new(|| Runtime::new().expect("test runtime"));
static LOCK: Mutex<()> = Mutex::new(());

/// The store handle is a process-wide OnceCell, so every test in a binary
/// shares one runtime and one in-memory database. The lock serializes
/// tests; each test keeps to its own rows via unique natural keys.
pub fn run<F, Fut>(test: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let _guard = LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    RUNTIME.block_on(async {
        init_store().await;
        test().await;
    });
}

async fn init_store() {
    if DATABASE_CONNECTION.get().is_some() {
        return;
    }

    // Config is read lazily from the environment; seed it before anything
    // touches APP_CONFIG.
    unsafe {
        std::env::set_var("DATABASE_URL", "sqlite::memory:");
        std::env::set_var("SESSION_SECRET", "integration-test-secret");
    }

    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let connection = Database::connect(options).await.expect("connect store");
    Migrator::up(&connection, None).await.expect("run migrations");
    let _ = DATABASE_CONNECTION.set(connection);
}

pub async fn app() -> Router {
    create_app().await.expect("build router")
}

/// Creates the fixed admin account directly in the store when missing.
pub async fn ensure_admin() {
    let user_repo = UserRepository::new();
    let existing = user_repo.find_admin().await.expect("query admin");
    if existing.is_none() {
        let hash = bcrypt::hash(ADMIN_PASSWORD, 4).expect("hash password");
        user_repo
            .create(
                Uuid::new_v4(),
                ADMIN_EMAIL.to_string(),
                hash,
                Some("Test Admin".to_string()),
                RoleEnum::Admin,
            )
            .await
            .expect("create admin");
    }
}

pub async fn request(
    app: &Router,
    method: &str,
    path: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

/// Logs in and returns the `name=value` cookie pair for later requests.
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "email": email, "password": password }).to_string(),
        ))
        .expect("build request");

    let response = app.clone().oneshot(request).await.expect("send request");
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie set")
        .to_str()
        .expect("cookie header")
        .to_string();
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

pub async fn admin_session(app: &Router) -> String {
    ensure_admin().await;
    login(app, ADMIN_EMAIL, ADMIN_PASSWORD).await
}

/// Registers a regular (non-admin) account and logs it in.
pub async fn member_session(app: &Router, email: &str) -> String {
    let (status, _) = request(
        app,
        "POST",
        "/users/register",
        None,
        Some(json!({ "email": email, "password": "member-pass", "name": "Member" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    login(app, email, "member-pass").await
}

pub fn error_message(body: &Value) -> &str {
    body.get("error")
        .and_then(Value::as_str)
        .expect("error body")
}
