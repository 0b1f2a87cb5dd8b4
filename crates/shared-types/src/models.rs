use crate::UserType;
use serde::{Deserialize, Serialize};

/// The authenticated caller, as resolved from a validated access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Identity {
    pub id: i64,
    #[serde(default)]
    pub email: String,
}

/// A user's profile record. Only the onboarding fields live here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Profile {
    pub id: i64,
    /// `None` until the user finishes the user type step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
    /// RFC 3339 timestamp of the last write.
    pub updated_at: String,
}
