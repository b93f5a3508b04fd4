//! HTTP-level tests for registration, login, and session handling.
//!
//! Input checks run offline. The full flows need Postgres and are ignored by
//! default; run them with `DATABASE_URL` set and `--ignored`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, put_json_auth, token_for};
use healthbook_api::auth::password::hash_password;
use healthbook_core::roles::{ROLE_USER, SUPERADMIN_ONLY_MESSAGE};
use healthbook_db::models::user::{CreateUser, UpdateUser};
use healthbook_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Offline input checks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_rejects_invalid_email() {
    let body = serde_json::json!({
        "email": "not-an-email",
        "full_name": "Ana Lima",
        "password": "long-enough-password",
    });

    let response = post_json(common::build_offline_app(), "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn register_rejects_short_password() {
    let body = serde_json::json!({
        "email": "ana@example.com",
        "full_name": "Ana Lima",
        "password": "short",
    });

    let response = post_json(common::build_offline_app(), "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Password must be at least 8 characters long"
    );
}

#[tokio::test]
async fn register_rejects_blank_full_name() {
    let body = serde_json::json!({
        "email": "ana@example.com",
        "full_name": "   ",
        "password": "long-enough-password",
    });

    let response = post_json(common::build_offline_app(), "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Full name must not be empty");
}

#[tokio::test]
async fn change_password_rejects_short_new_password() {
    let token = token_for(7, ROLE_USER);
    let body = serde_json::json!({
        "current_password": "whatever-it-was",
        "new_password": "tiny",
    });

    let response =
        put_json_auth(common::build_offline_app(), "/api/v1/auth/password", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_requires_auth() {
    let response = post_json(
        common::build_offline_app(),
        "/api/v1/auth/logout",
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Database-backed flows
// ---------------------------------------------------------------------------

const PASSWORD: &str = "test_password_123!";

async fn create_test_user(pool: &PgPool, email: &str, role_id: i64) -> i64 {
    let input = CreateUser {
        email: email.to_string(),
        full_name: "Test User".to_string(),
        password_hash: hash_password(PASSWORD).expect("hashing should succeed"),
        role_id,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
        .id
}

async fn login(
    app: axum::Router,
    email: &str,
    password: &str,
) -> axum::http::Response<axum::body::Body> {
    let body = serde_json::json!({ "email": email, "password": password });
    post_json(app, "/api/v1/auth/login", body).await
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires Postgres"]
async fn register_then_me(pool: PgPool) {
    let body = serde_json::json!({
        "email": "Ana@Example.com",
        "full_name": "Ana Lima",
        "password": PASSWORD,
    });
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "ana@example.com");
    assert_eq!(json["user"]["role"], "user");
    let token = json["access_token"].as_str().unwrap().to_string();

    let response = get_auth(common::build_test_app(pool), "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["full_name"], "Ana Lima");
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires Postgres"]
async fn duplicate_registration_conflicts(pool: PgPool) {
    create_test_user(&pool, "taken@example.com", 2).await;
    let body = serde_json::json!({
        "email": "TAKEN@example.com",
        "full_name": "Someone Else",
        "password": PASSWORD,
    });

    let response = post_json(common::build_test_app(pool), "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires Postgres"]
async fn login_refresh_and_logout(pool: PgPool) {
    create_test_user(&pool, "flow@example.com", 2).await;

    let response = login(common::build_test_app(pool.clone()), "flow@example.com", PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    let access_token = rotated["access_token"].as_str().unwrap().to_string();

    // The old refresh token was rotated out.
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/logout",
        serde_json::json!({}),
        &access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": rotated["refresh_token"] });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires Postgres"]
async fn account_locks_after_repeated_failures(pool: PgPool) {
    create_test_user(&pool, "lockme@example.com", 2).await;

    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let response = login(app, "lockme@example.com", "wrong_pass").await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = login(common::build_test_app(pool), "lockme@example.com", PASSWORD).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires Postgres"]
async fn superadmin_can_list_users(pool: PgPool) {
    let admin_id = create_test_user(&pool, "admin@example.com", 1).await;
    create_test_user(&pool, "member@example.com", 2).await;
    let token = token_for(admin_id, "superadmin");

    let response = get_auth(common::build_test_app(pool), "/api/v1/admin/users", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires Postgres"]
async fn superadmin_tip_validation_runs_before_insert(pool: PgPool) {
    let admin_id = create_test_user(&pool, "admin@example.com", 1).await;
    let token = token_for(admin_id, "superadmin");
    let body = serde_json::json!({
        "title": "Sleep",
        "content": "Aim for eight hours.",
        "category": "astrology",
    });

    let response =
        post_json_auth(common::build_test_app(pool), "/api/v1/wellness-tips", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires Postgres"]
async fn deactivated_superadmin_loses_access_immediately(pool: PgPool) {
    let admin_id = create_test_user(&pool, "gone@example.com", 1).await;
    let token = token_for(admin_id, "superadmin");
    UserRepo::deactivate(&pool, admin_id).await.unwrap();

    let response = get_auth(common::build_test_app(pool), "/api/v1/admin/users", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Account is deactivated");
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires Postgres"]
async fn demoted_superadmin_is_denied_with_stale_token(pool: PgPool) {
    let admin_id = create_test_user(&pool, "demoted@example.com", 1).await;
    let token = token_for(admin_id, "superadmin");
    let demote = UpdateUser {
        full_name: None,
        role_id: Some(2),
        is_active: None,
    };
    UserRepo::update(&pool, admin_id, &demote).await.unwrap();

    let response = get_auth(common::build_test_app(pool), "/api/v1/admin/users", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], SUPERADMIN_ONLY_MESSAGE);
}

#[sqlx::test(migrations = "../db/migrations")]
#[ignore = "requires Postgres"]
async fn duplicate_registration_names_the_email(pool: PgPool) {
    create_test_user(&pool, "twice@example.com", 2).await;
    let body = serde_json::json!({
        "email": "twice@example.com",
        "full_name": "Second Try",
        "password": PASSWORD,
    });

    let response = post_json(common::build_test_app(pool), "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["error"],
        "An account with this email already exists"
    );
}
