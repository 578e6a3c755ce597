//! Integration tests for the /parents endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{id_of, ids_in, TestApp};

#[tokio::test]
async fn test_parent_lifecycle() {
    let app = TestApp::start().await;

    let (status, created) = app
        .send(
            "POST",
            "/parents/",
            Some(json!({
                "name_and_surname": "Bo Lee",
                "email": "bo@example.com"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = id_of(&created);
    assert_eq!(created["name_and_surname"], "Bo Lee");
    assert_eq!(created["email"], "bo@example.com");
    assert_eq!(created["kids"], json!([]));

    let (status, fetched) = app.send("GET", &format!("/parents/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, deleted) = app.send("DELETE", &format!("/parents/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "message": "Parent deleted successfully" }));

    let (status, missing) = app.send("GET", &format!("/parents/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing, json!({ "detail": "Parent not found" }));
}

#[tokio::test]
async fn test_list_parents() {
    let app = TestApp::start().await;

    let (_, empty) = app.send("GET", "/parents", None).await;
    assert_eq!(empty, json!({ "data": [], "count": 0 }));

    let a = id_of(&app.create_parent("Ana Ruiz", &[]).await);
    let b = id_of(&app.create_parent("Luis Ruiz", &[]).await);

    let (status, body) = app.send("GET", "/parents/?limit=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids_in(&body["data"]), vec![a]);
    assert_eq!(body["count"], 2);

    let (_, body) = app.send("GET", "/parents/?skip=1", None).await;
    assert_eq!(ids_in(&body["data"]), vec![b]);
}

#[tokio::test]
async fn test_partial_update_parent() {
    let app = TestApp::start().await;
    let id = id_of(&app.create_parent("Bo Lee", &[]).await);

    let (status, updated) = app
        .send("PUT", &format!("/parents/{id}"), Some(json!({ "email": "bo.lee@example.com" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({
            "id": id,
            "name_and_surname": "Bo Lee",
            "email": "bo.lee@example.com"
        })
    );

    let (status, body) = app
        .send("PUT", "/parents/999", Some(json!({ "email": "x@example.com" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Parent not found" }));
}

#[tokio::test]
async fn test_create_parent_with_unknown_kid() {
    let app = TestApp::start().await;

    let (status, body) = app
        .send(
            "POST",
            "/parents/",
            Some(json!({
                "name_and_surname": "Bo Lee",
                "email": "bo@example.com",
                "kid_ids": [9999]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Kid not found" }));

    // The parent row was committed before the kid lookup failed.
    let (_, list) = app.send("GET", "/parents/", None).await;
    assert_eq!(list["count"], 1);
    let id = id_of(&list["data"][0]);
    let (status, parent) = app.send("GET", &format!("/parents/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parent["kids"], json!([]));
}

#[tokio::test]
async fn test_delete_unknown_parent() {
    let app = TestApp::start().await;
    let (status, body) = app.send("DELETE", "/parents/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Parent not found" }));
}

#[tokio::test]
async fn test_update_parent_rejects_explicit_null() {
    let app = TestApp::start().await;
    let id = id_of(&app.create_parent("Bo Lee", &[]).await);

    let (status, body) = app
        .send("PUT", &format!("/parents/{id}"), Some(json!({ "email": null })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (_, fetched) = app.send("GET", &format!("/parents/{id}"), None).await;
    assert_eq!(fetched["email"], "bo.lee@example.com");
    assert_eq!(fetched["name_and_surname"], "Bo Lee");
}
