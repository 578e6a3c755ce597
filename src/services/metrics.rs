use lazy_static::lazy_static;
use prometheus::{register_counter_vec, register_gauge, CounterVec, Gauge};
use sqlx::SqlitePool;
use tracing::debug;

lazy_static! {
    // ── Event counters (increment on each write) ────────────────────────────
    pub static ref ENTITY_WRITES_COUNTER: CounterVec = register_counter_vec!(
        "api_entity_writes_total",
        "Successful writes by resource and action",
        &["resource", "action"]
    ).expect("metric api_entity_writes_total registers once");

    // ── Registry size ───────────────────────────────────────────────────────
    pub static ref KIDS_GAUGE: Gauge = register_gauge!(
        "registry_kids_total",
        "Stored kids"
    ).expect("metric registry_kids_total registers once");

    pub static ref PARENTS_GAUGE: Gauge = register_gauge!(
        "registry_parents_total",
        "Stored parents"
    ).expect("metric registry_parents_total registers once");

    pub static ref LINKS_GAUGE: Gauge = register_gauge!(
        "registry_links_total",
        "Stored parent-kid links"
    ).expect("metric registry_links_total registers once");
}

pub fn record_write(resource: &str, action: &str) {
    record_writes(resource, action, 1);
}

pub fn record_writes(resource: &str, action: &str, count: u64) {
    if count > 0 {
        ENTITY_WRITES_COUNTER
            .with_label_values(&[resource, action])
            .inc_by(count as f64);
    }
}

/// Refreshes the registry gauges from the current row counts.
pub async fn collect(pool: &SqlitePool) -> anyhow::Result<()> {
    let kids: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kid")
        .fetch_one(pool)
        .await?;
    let parents: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM parent")
        .fetch_one(pool)
        .await?;
    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM parentkidlink")
        .fetch_one(pool)
        .await?;

    KIDS_GAUGE.set(kids as f64);
    PARENTS_GAUGE.set(parents as f64);
    LINKS_GAUGE.set(links as f64);

    debug!(kids, parents, links, "Metrics: collected");
    Ok(())
}
