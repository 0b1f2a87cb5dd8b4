use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{get, offline_app, patch_user_type, test_app, token_for};

#[tokio::test]
async fn my_profile_requires_auth() {
    let app = offline_app();

    let (status, body) = get(&app, "/api/profiles/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authentication required");
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn my_profile_is_not_found_before_onboarding() {
    let (app, _pool, _guard) = test_app().await;
    let token = token_for(7);

    let (status, body) = get(&app, "/api/profiles/me", Some(&token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn my_profile_reflects_saved_user_type() {
    let (app, _pool, _guard) = test_app().await;
    let token = token_for(8);

    let (status, _) =
        patch_user_type(&app, "8", json!({ "user_type": "events_manager" }), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/api/profiles/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_type"], "events_manager");
}
