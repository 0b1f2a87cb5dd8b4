use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::AppError;

use super::jwt::Claims;

/// Extractor that requires authentication. Returns 401 if no valid token.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Only the owner of a profile may write to it. Used by both the REST handler
/// and the server function.
pub fn require_owner(claims: &Claims, user_id: i64) -> Result<(), AppError> {
    if claims.sub != user_id {
        tracing::warn!(caller = claims.sub, user_id, "Rejected cross-user profile update");
        return Err(AppError::forbidden("Cannot update another user's profile"));
    }
    Ok(())
}
