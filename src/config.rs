use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    /// Mount point for the resource routers, e.g. `/api/v1`. `None` mounts them at the root.
    pub api_prefix: Option<String>,
    /// Allowed CORS origins. Empty means localhost only.
    pub cors_origins: Vec<String>,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "20".into())
                .parse()?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            api_prefix: env::var("API_PREFIX")
                .ok()
                .and_then(|p| normalize_prefix(&p)),
            cors_origins: env::var("BACKEND_CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
            body_limit_bytes: env::var("BODY_LIMIT_BYTES")
                .unwrap_or_else(|_| "1048576".into())
                .parse()?,
        })
    }

    /// Settings for tests and tools that build the router around an existing pool.
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            database_max_connections: 20,
            host: "127.0.0.1".into(),
            port: 8080,
            api_prefix: None,
            cors_origins: Vec::new(),
            body_limit_bytes: 1024 * 1024,
        }
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).map_err(|_| anyhow::anyhow!("Missing required env var: {}", key))
}

/// Turns `api/v1/`, `/api/v1` or `/api/v1/` into `/api/v1`. Blank or `/` means no prefix.
fn normalize_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/').to_string())
        .filter(|o| !o.is_empty())
        .collect()
}
