pub mod health;
pub mod kids;
pub mod metrics;
pub mod parents;

use axum::{routing::get, Router};

use crate::AppState;

/// Kid and parent resources. List and create answer with and without the trailing slash.
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        // Kids
        .route("/kids", get(kids::list_kids).post(kids::create_kid))
        .route("/kids/", get(kids::list_kids).post(kids::create_kid))
        .route(
            "/kids/{id}",
            get(kids::read_kid).put(kids::update_kid).delete(kids::delete_kid),
        )
        // Parents
        .route("/parents", get(parents::list_parents).post(parents::create_parent))
        .route("/parents/", get(parents::list_parents).post(parents::create_parent))
        .route(
            "/parents/{id}",
            get(parents::read_parent)
                .put(parents::update_parent)
                .delete(parents::delete_parent),
        )
}
