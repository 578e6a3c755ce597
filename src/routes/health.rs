use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Reports store reachability and the latest applied migration.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let version: Result<Option<i64>, sqlx::Error> =
        sqlx::query_scalar("SELECT MAX(version) FROM _sqlx_migrations WHERE success = TRUE")
            .fetch_one(&state.db)
            .await;

    match version {
        Ok(schema_version) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "db": "connected", "schema_version": schema_version })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "error", "db": e.to_string() })),
            )
        }
    }
}
