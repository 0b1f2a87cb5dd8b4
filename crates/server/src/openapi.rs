use axum::Router;
use shared_types::{AppError, AppErrorKind, Profile, UpdateUserTypeRequest, UserType};
use sqlx::{Pool, Postgres};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::profile::get_my_profile,
        rest::profile::update_user_type,
        health::health_check,
    ),
    components(schemas(
        Profile, UserType, UpdateUserTypeRequest, AppError, AppErrorKind,
        health::HealthResponse,
    )),
    tags(
        (name = "profiles", description = "Profile onboarding endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Backstage API",
        description = "Onboarding and profile API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the REST API at `/api/*`, the health
/// check, and (when enabled) the API reference at `/docs`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };
    let flags = crate::config::feature_flags();

    let router = Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state);

    if flags.docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    }
}
