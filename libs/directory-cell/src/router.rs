use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn directory_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/locations", get(handlers::get_locations))
        .route("/services", get(handlers::get_services))
        .route("/doctors", get(handlers::get_doctors))
        .with_state(state)
}
