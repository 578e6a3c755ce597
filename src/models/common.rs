use serde::{Deserialize, Serialize};

fn default_limit() -> i64 {
    100
}

/// Offset/limit query parameters shared by the list endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self { skip: 0, limit: default_limit() }
    }
}

/// One page of rows plus the total row count, independent of paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    pub data: Vec<T>,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
