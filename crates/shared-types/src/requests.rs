use crate::{AppError, UserType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for setting the caller's user type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UpdateUserTypeRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please select a user type"))
    )]
    pub user_type: String,
}

impl UpdateUserTypeRequest {
    /// Resolve the requested identifier to a `UserType`.
    ///
    /// Unknown identifiers come back as a validation error on the
    /// `user_type` field so forms can show it inline.
    pub fn user_type(&self) -> Result<UserType, AppError> {
        UserType::parse(self.user_type.trim()).ok_or_else(|| {
            let mut fields = HashMap::new();
            fields.insert(
                "user_type".to_string(),
                format!("Unknown user type '{}'", self.user_type),
            );
            AppError::validation("Validation failed", fields)
        })
    }
}
