pub mod profile;

use axum::{routing::{get, patch}, Router};
use crate::db::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/profiles/me", get(profile::get_my_profile))
        .route("/api/profiles/{id}/user-type", patch(profile::update_user_type))
}
