//! Authentication and role-gate enforcement at the HTTP layer.
//!
//! Requests here run against a pool that never connects. Users are rejected
//! from the token alone; superadmin claims need the database to confirm.

mod common;

use axum::body::Body;
use axum::http::header::AUTHORIZATION;
use axum::http::{Request, StatusCode};
use common::{
    body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth, send, token_for,
};
use healthbook_api::auth::jwt::{generate_access_token, JwtConfig};
use healthbook_core::roles::{ROLE_USER, SUPERADMIN_ONLY_MESSAGE};

async fn assert_superadmin_only(response: axum::http::Response<Body>) {
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(json["error"], SUPERADMIN_ONLY_MESSAGE);
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn protected_routes_require_a_token() {
    for uri in [
        "/api/v1/auth/me",
        "/api/v1/family-members",
        "/api/v1/medical-records",
        "/api/v1/health-metrics",
        "/api/v1/health-metrics/summary",
        "/api/v1/wellness-tips",
        "/api/v1/reminders",
        "/api/v1/admin/users",
    ] {
        let response = get(common::build_offline_app(), uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "UNAUTHORIZED", "{uri}");
        assert_eq!(json["error"], "Missing Authorization header", "{uri}");
    }
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    let request = Request::builder()
        .uri("/api/v1/medical-records")
        .header(AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = send(common::build_offline_app(), request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(
        json["error"],
        "Invalid Authorization format. Expected: Bearer <token>"
    );
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let response = get_auth(
        common::build_offline_app(),
        "/api/v1/reminders",
        "not.a.jwt",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}

#[tokio::test]
async fn token_signed_with_another_secret_is_rejected() {
    let foreign = JwtConfig {
        secret: "some-other-secret".to_string(),
        access_token_expiry_mins: 15,
        refresh_token_expiry_days: 7,
    };
    let token = generate_access_token(1, "superadmin", &foreign).unwrap();

    let response = get_auth(common::build_offline_app(), "/api/v1/admin/users", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let mut config = common::test_jwt_config();
    config.access_token_expiry_mins = -10;
    let token = generate_access_token(1, ROLE_USER, &config).unwrap();

    let response = get_auth(common::build_offline_app(), "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Superadmin gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn user_cannot_create_wellness_tip() {
    let token = token_for(7, ROLE_USER);
    let body = serde_json::json!({ "title": "Drink water", "content": "Eight glasses a day." });

    let response =
        post_json_auth(common::build_offline_app(), "/api/v1/wellness-tips", body, &token).await;

    assert_superadmin_only(response).await;
}

#[tokio::test]
async fn user_cannot_update_or_delete_wellness_tip() {
    let token = token_for(7, ROLE_USER);

    let response = put_json_auth(
        common::build_offline_app(),
        "/api/v1/wellness-tips/1",
        serde_json::json!({ "is_published": false }),
        &token,
    )
    .await;
    assert_superadmin_only(response).await;

    let response =
        delete_auth(common::build_offline_app(), "/api/v1/wellness-tips/1", &token).await;
    assert_superadmin_only(response).await;
}

#[tokio::test]
async fn invalid_tip_body_is_still_forbidden_for_user() {
    let token = token_for(7, ROLE_USER);
    let body = serde_json::json!({ "title": "", "content": "", "category": "astrology" });

    let response =
        post_json_auth(common::build_offline_app(), "/api/v1/wellness-tips", body, &token).await;

    assert_superadmin_only(response).await;
}

#[tokio::test]
async fn user_cannot_reach_admin_routes() {
    let token = token_for(7, ROLE_USER);

    let response = get_auth(common::build_offline_app(), "/api/v1/admin/users", &token).await;
    assert_superadmin_only(response).await;

    let response = get_auth(common::build_offline_app(), "/api/v1/admin/users/3", &token).await;
    assert_superadmin_only(response).await;

    let response = put_json_auth(
        common::build_offline_app(),
        "/api/v1/admin/users/3",
        serde_json::json!({ "role_id": 1 }),
        &token,
    )
    .await;
    assert_superadmin_only(response).await;

    let response = delete_auth(common::build_offline_app(), "/api/v1/admin/users/3", &token).await;
    assert_superadmin_only(response).await;

    let response = post_json_auth(
        common::build_offline_app(),
        "/api/v1/admin/users/3/reset-password",
        serde_json::json!({ "new_password": "another-long-password" }),
        &token,
    )
    .await;
    assert_superadmin_only(response).await;
}

#[tokio::test]
async fn role_names_are_case_sensitive() {
    let token = token_for(7, "Superadmin");

    let response = get_auth(common::build_offline_app(), "/api/v1/admin/users", &token).await;

    assert_superadmin_only(response).await;
}

#[tokio::test]
async fn superadmin_claim_is_checked_against_the_account() {
    // The pool never connects, so a gate that consulted only the token
    // would let this request through to validation (400).
    let token = token_for(1, "superadmin");
    let body = serde_json::json!({
        "title": "Sleep",
        "content": "Aim for eight hours.",
        "category": "astrology",
    });

    let response =
        post_json_auth(common::build_offline_app(), "/api/v1/wellness-tips", body, &token).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
}
