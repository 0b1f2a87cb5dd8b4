use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::{Pool, Postgres};

use crate::auth::extractors::{require_owner, AuthRequired};
use crate::error_convert::ValidateRequest;
use shared_types::{AppError, Profile, UpdateUserTypeRequest};

// ---------------------------------------------------------------------------
// GET /api/profiles/me
// ---------------------------------------------------------------------------

/// Get the caller's profile.
#[utoipa::path(
    get,
    path = "/api/profiles/me",
    responses(
        (status = 200, description = "Profile found", body = Profile),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 404, description = "No profile yet", body = AppError)
    ),
    tag = "profiles"
)]
pub async fn get_my_profile(
    State(pool): State<Pool<Postgres>>,
    auth: AuthRequired,
) -> Result<Json<Profile>, AppError> {
    let profile = crate::repo::profile::find_by_id(&pool, auth.0.sub)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No profile for user {}", auth.0.sub)))?;

    Ok(Json(profile))
}

// ---------------------------------------------------------------------------
// PATCH /api/profiles/{id}/user-type
// ---------------------------------------------------------------------------

/// Set the user type on a profile. Callers may only update their own.
#[utoipa::path(
    patch,
    path = "/api/profiles/{id}/user-type",
    params(
        ("id" = i64, Path, description = "User id")
    ),
    request_body = UpdateUserTypeRequest,
    responses(
        (status = 200, description = "User type saved", body = Profile),
        (status = 400, description = "Invalid id", body = AppError),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Not the profile owner", body = AppError),
        (status = 422, description = "Unknown user type", body = AppError)
    ),
    tag = "profiles"
)]
pub async fn update_user_type(
    State(pool): State<Pool<Postgres>>,
    auth: AuthRequired,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserTypeRequest>,
) -> Result<Json<Profile>, AppError> {
    let user_id: i64 = id
        .parse()
        .map_err(|_| AppError::bad_request("Invalid user id"))?;

    require_owner(&auth.0, user_id)?;
    body.validate_request()?;
    let user_type = body.user_type()?;

    let profile = crate::repo::profile::update_user_type(&pool, user_id, user_type).await?;
    tracing::info!(user_id, user_type = %user_type, "User type updated");

    Ok(Json(profile))
}
