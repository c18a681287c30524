use std::sync::Arc;

use axum::{routing::get, Router};

use directory_cell::router::directory_routes;
use scheduling_cell::router::scheduling_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Harbor Clinic API is running!" }))
        .nest("/directory", directory_routes(state.clone()))
        .nest("/scheduling", scheduling_routes(state))
}
