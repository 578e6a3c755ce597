use std::ops::{Deref, DerefMut};

use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection};

use crate::{error::ApiError, AppState};

/// One pooled connection held for the whole request.
///
/// Handlers run every statement of a request on this connection. It goes back to
/// the pool when the handler returns, whether it succeeded or not.
pub struct Session(PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let conn = state.db.acquire().await?;
        Ok(Session(conn))
    }
}

impl Deref for Session {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
