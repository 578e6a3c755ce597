use axum::{extract::State, http::StatusCode};
use prometheus::{Encoder, TextEncoder};

use crate::{services::metrics, AppState};

/// GET /metrics: refreshes the registry gauges, then renders every metric in
/// Prometheus text format.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    // Stale gauges are still worth exporting alongside the counters.
    if let Err(e) = metrics::collect(&state.db).await {
        tracing::warn!("Metrics: collection failed: {}", e);
    }

    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&prometheus::gather(), &mut buffer)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    String::from_utf8(buffer).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
