use chrono::{DateTime, Utc};
use shared_types::{AppError, Profile, UserType};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    user_type: Option<String>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            // The CHECK constraint keeps stored values inside the enum.
            user_type: row.user_type.as_deref().and_then(UserType::parse),
            updated_at: row.updated_at.to_rfc3339(),
        }
    }
}

/// Find a profile by user id.
pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<Profile>, AppError> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT id, user_type, updated_at
        FROM profiles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row.map(Profile::from))
}

/// Set `user_type` on the profile keyed by `id`.
///
/// A single statement: the row is created if the identity has no profile
/// yet, otherwise only `user_type` and `updated_at` change.
pub async fn update_user_type(
    pool: &Pool<Postgres>,
    id: i64,
    user_type: UserType,
) -> Result<Profile, AppError> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO profiles (id, user_type)
        VALUES ($1, $2)
        ON CONFLICT (id) DO UPDATE
            SET user_type = EXCLUDED.user_type,
                updated_at = NOW()
        RETURNING id, user_type, updated_at
        "#,
    )
    .bind(id)
    .bind(user_type.as_str())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(Profile::from(row))
}
