use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn scheduling_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/schedules", get(handlers::get_schedules))
        .route("/schedule-detail", get(handlers::get_schedule_detail))
        .with_state(state)
}
