//! Health check endpoint
//!
//! Reports the build and whether the lookup tables can be read. An
//! unreadable database answers 503 so load balancers stop routing lookups.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::AppState;
use civic_common::build_info::GIT_COMMIT;
use civic_common::db::{table_counts, TableCounts};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" or "unavailable"
    pub status: &'static str,
    pub version: &'static str,
    pub commit: &'static str,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    /// Row counts; absent when the tables cannot be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<TableCounts>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, status, database) = match table_counts(&state.db).await {
        Ok(rows) => (
            StatusCode::OK,
            "ok",
            DatabaseHealth {
                reachable: true,
                rows: Some(rows),
            },
        ),
        Err(e) => {
            warn!("Health check could not read the database: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "unavailable",
                DatabaseHealth {
                    reachable: false,
                    rows: None,
                },
            )
        }
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            commit: GIT_COMMIT,
            database,
        }),
    )
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
