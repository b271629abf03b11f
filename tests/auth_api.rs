mod common;

use http::StatusCode;
use serde_json::json;

use acadesk::repositories::UserRepository;

#[test]
fn init_bootstraps_exactly_one_admin() {
    common::run(|| async {
        let app = common::app().await;

        let admin_exists = UserRepository::new()
            .find_admin()
            .await
            .expect("query admin")
            .is_some();

        if !admin_exists {
            let (status, body) = common::request(
                &app,
                "POST",
                "/init",
                None,
                Some(json!({
                    "email": common::ADMIN_EMAIL,
                    "password": common::ADMIN_PASSWORD,
                    "name": "Test Admin"
                })),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(body["message"], "Admin user created successfully");
            assert_eq!(body["user"]["email"], common::ADMIN_EMAIL);
            assert!(body["user"].get("password").is_none());
        }

        // A second bootstrap attempt always fails once an admin exists.
        let (status, body) = common::request(
            &app,
            "POST",
            "/init",
            None,
            Some(json!({
                "email": "second@example.edu",
                "password": "whatever",
                "name": "Second Admin"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(common::error_message(&body), "Admin already exists");
    });
}

#[test]
fn init_requires_all_fields() {
    common::run(|| async {
        let app = common::app().await;
        let (status, body) = common::request(
            &app,
            "POST",
            "/init",
            None,
            Some(json!({ "email": "partial@example.edu" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            common::error_message(&body),
            "Email, password, and name are required"
        );
    });
}

#[test]
fn login_sets_cookie_and_never_leaks_password() {
    common::run(|| async {
        let app = common::app().await;
        common::ensure_admin().await;

        let (status, body) = common::request(
            &app,
            "POST",
            "/auth/login",
            None,
            Some(json!({
                "email": common::ADMIN_EMAIL,
                "password": common::ADMIN_PASSWORD
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], common::ADMIN_EMAIL);
        assert_eq!(body["role"], "admin");
        assert!(body.get("password").is_none());

        let cookie = common::login(&app, common::ADMIN_EMAIL, common::ADMIN_PASSWORD).await;
        assert!(cookie.starts_with("session_token="));

        let (status, body) = common::request(
            &app,
            "POST",
            "/auth/login",
            None,
            Some(json!({
                "email": common::ADMIN_EMAIL,
                "password": "wrong-password"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(common::error_message(&body), "Unauthorized");
    });
}

#[test]
fn logout_clears_the_session() {
    common::run(|| async {
        let app = common::app().await;
        let (status, body) = common::request(&app, "POST", "/auth/logout", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Logged out successfully");
    });
}

#[test]
fn register_rejects_duplicates_and_second_admin() {
    common::run(|| async {
        let app = common::app().await;
        common::ensure_admin().await;

        let (status, body) = common::request(
            &app,
            "POST",
            "/users/register",
            None,
            Some(json!({
                "email": "staff.one@example.edu",
                "password": "staff-pass",
                "name": "Staff One"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["role"], "user");
        assert!(body.get("password").is_none());

        let (status, body) = common::request(
            &app,
            "POST",
            "/users/register",
            None,
            Some(json!({
                "email": "staff.one@example.edu",
                "password": "other-pass"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(common::error_message(&body), "User already exists");

        let (status, body) = common::request(
            &app,
            "POST",
            "/users/register",
            None,
            Some(json!({
                "email": "wannabe.admin@example.edu",
                "password": "admin-pass",
                "role": "admin"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            common::error_message(&body),
            "Admin already exists. Use the init endpoint to create the first admin."
        );
    });
}

#[test]
fn change_password_is_admin_only_and_verifies_current() {
    common::run(|| async {
        let app = common::app().await;

        let member_cookie = common::member_session(&app, "pw.member@example.edu").await;
        let (status, body) = common::request(
            &app,
            "POST",
            "/change-password",
            Some(&member_cookie),
            Some(json!({
                "currentPassword": "member-pass",
                "newPassword": "new-pass"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            common::error_message(&body),
            "Only admins can change passwords"
        );

        let admin_cookie = common::admin_session(&app).await;
        let (status, body) = common::request(
            &app,
            "POST",
            "/change-password",
            Some(&admin_cookie),
            Some(json!({
                "currentPassword": "not-the-password",
                "newPassword": "new-admin-pass"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            common::error_message(&body),
            "Current password is incorrect"
        );

        let (status, body) = common::request(
            &app,
            "POST",
            "/change-password",
            Some(&admin_cookie),
            Some(json!({
                "currentPassword": common::ADMIN_PASSWORD,
                "newPassword": "rotated-admin-pass"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Password updated successfully");
        assert_eq!(body["email"], common::ADMIN_EMAIL);

        // New password works; restore the fixture password for other tests.
        let cookie = common::login(&app, common::ADMIN_EMAIL, "rotated-admin-pass").await;
        let (status, _) = common::request(
            &app,
            "POST",
            "/change-password",
            Some(&cookie),
            Some(json!({
                "currentPassword": "rotated-admin-pass",
                "newPassword": common::ADMIN_PASSWORD
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    });
}
