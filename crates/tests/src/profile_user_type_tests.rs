use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{offline_app, patch_user_type, test_app, token_for};

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = offline_app();

    let (status, body) = patch_user_type(&app, "1", json!({ "user_type": "fan" }), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "Unauthorized");
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let app = offline_app();

    let (status, _) =
        patch_user_type(&app, "1", json!({ "user_type": "fan" }), Some("not-a-jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn updating_another_users_profile_is_forbidden() {
    let app = offline_app();
    let token = token_for(1);

    let (status, body) =
        patch_user_type(&app, "2", json!({ "user_type": "artist" }), Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Cannot update another user's profile");
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let app = offline_app();
    let token = token_for(1);

    let (status, body) =
        patch_user_type(&app, "me", json!({ "user_type": "artist" }), Some(&token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "BadRequest");
}

#[tokio::test]
async fn unknown_user_type_is_rejected() {
    let app = offline_app();
    let token = token_for(4);

    let (status, body) =
        patch_user_type(&app, "4", json!({ "user_type": "producer" }), Some(&token)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "ValidationError");
    assert!(body["field_errors"]["user_type"].is_string());
}

#[tokio::test]
async fn empty_user_type_is_rejected() {
    let app = offline_app();
    let token = token_for(4);

    let (status, body) =
        patch_user_type(&app, "4", json!({ "user_type": "" }), Some(&token)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field_errors"]["user_type"], "Please select a user type");
}

#[tokio::test]
#[ignore = "needs TEST_DATABASE_URL"]
async fn fan_selection_is_persisted() {
    let (app, _pool, _guard) = test_app().await;
    let token = token_for(1);

    let (status, body) =
        patch_user_type(&app, "1", json!({ "user_type": "fan" }), Some(&token)).await;
    assert_eq!(status, StatusCode::OK, "update failed: {body:?}");
    assert_eq!(body["id"], 1);
    assert_eq!(body["user_type"], "fan");

    let (status, body) =
        patch_user_type(&app, "1", json!({ "user_type": "blogger" }), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_type"], "blogger", "last write wins");
}
