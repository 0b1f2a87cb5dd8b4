use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record when the server came up. Later calls keep the first value.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Liveness report for `/health`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the profile store is unreachable.
    pub status: String,
    pub db: String,
    pub uptime_seconds: u64,
    pub version: String,
}

impl HealthResponse {
    fn new(db: Result<(), String>, uptime_seconds: u64) -> Self {
        let (status, db) = match db {
            Ok(()) => ("ok", "connected".to_string()),
            Err(e) => ("degraded", format!("error: {e}")),
        };
        Self {
            status: status.to_string(),
            db,
            uptime_seconds,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health check handler. Answers 200 even when the database is down.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(pool): State<Pool<Postgres>>) -> Json<HealthResponse> {
    let db = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            tracing::warn!(error = %e, "Health check could not reach the database");
            e.to_string()
        });

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);
    Json(HealthResponse::new(db, uptime))
}
