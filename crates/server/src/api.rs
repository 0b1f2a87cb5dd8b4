use dioxus::prelude::*;
use shared_types::{FeatureFlags, Identity, Profile, UserType};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

// ── Auth helpers for server functions ──────────────────

/// Resolve the caller's claims from the current request, if any.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
#[cfg(feature = "server")]
fn current_claims() -> Option<crate::auth::jwt::Claims> {
    use crate::auth::{cookies, jwt};

    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Some(claims.clone());
    }

    let token = cookies::extract_access_token(&parts.headers)?;
    jwt::validate_access_token(&token).ok()
}

/// Check that the caller may set the user type on `user_id`'s profile:
/// 401 without a session, 403 for anyone but the owner.
#[cfg(feature = "server")]
fn authorize_user_type_write(
    claims: Option<crate::auth::jwt::Claims>,
    user_id: i64,
) -> Result<crate::auth::jwt::Claims, shared_types::AppError> {
    let claims = claims
        .ok_or_else(|| shared_types::AppError::unauthorized("Authentication required"))?;
    crate::auth::extractors::require_owner(&claims, user_id)?;
    Ok(claims)
}

/// Get the current feature flags. No auth required.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// The authenticated identity behind this request, or `None` when the
/// caller has no valid session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_identity() -> Result<Option<Identity>, ServerFnError> {
    let identity = current_claims().map(|claims| claims.identity());
    if identity.is_none() {
        tracing::debug!("No authenticated identity on request");
    }
    Ok(identity)
}

/// Persist the user type chosen during onboarding.
///
/// `user_id` must be the caller's own id; the write is a single statement
/// keyed on it.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_user_type(user_id: i64, user_type: UserType) -> Result<Profile, ServerFnError> {
    authorize_user_type_write(current_claims(), user_id).map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let profile = crate::repo::profile::update_user_type(db, user_id, user_type)
        .await
        .map_err(|e| {
            tracing::error!(user_id, error = %e, "Failed to update user type");
            e.into_server_fn_error()
        })?;

    tracing::info!(user_id, user_type = %user_type, "User type updated");
    Ok(profile)
}
