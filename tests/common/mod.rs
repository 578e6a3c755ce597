//! Shared helpers for the HTTP integration tests.
//!
//! Every test gets its own in-memory database with the migrations applied and
//! drives the real router through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

use kids_parents_api::{build_router, config::Config, db, AppState};

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn start() -> Self {
        Self::with_config(Config::for_database("sqlite::memory:")).await
    }

    pub async fn with_config(config: Config) -> Self {
        let pool = db::create_memory_pool()
            .await
            .expect("Should open in-memory database");
        db::run_migrations(&pool)
            .await
            .expect("Should apply migrations");
        let router = build_router(AppState::new(pool.clone(), config));
        Self { router, pool }
    }

    /// Send a request and return status plus parsed JSON body (`Value::Null` for non-JSON).
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Should read body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    /// Send a raw body with an optional `Content-Type` header.
    pub async fn send_body(
        &self,
        method: &str,
        uri: &str,
        content_type: Option<&str>,
        body: String,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Should read body");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn send_raw(&self, method: &str, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Should read body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    pub async fn create_kid(&self, name: &str, parent_ids: &[i64]) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/kids/",
                Some(serde_json::json!({
                    "name": name,
                    "first_surname": "Lee",
                    "second_surname": "Kim",
                    "parent_ids": parent_ids,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create kid failed: {body}");
        body
    }

    pub async fn create_parent(&self, name_and_surname: &str, kid_ids: &[i64]) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/parents/",
                Some(serde_json::json!({
                    "name_and_surname": name_and_surname,
                    "email": format!("{}@example.com", name_and_surname.to_lowercase().replace(' ', ".")),
                    "kid_ids": kid_ids,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create parent failed: {body}");
        body
    }
}

pub fn id_of(entity: &Value) -> i64 {
    entity["id"].as_i64().expect("entity has integer id")
}

pub fn ids_in(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(id_of)
        .collect()
}
