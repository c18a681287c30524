use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_database::store::RecordStoreClient;
use shared_models::error::AppError;

use crate::models::SchedulingError;
use crate::services::availability::AvailabilityService;

#[derive(Debug, Deserialize)]
pub struct MonthScheduleQuery {
    pub doctor: String,
    pub month: String,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleDetailQuery {
    pub doctor: String,
    pub date: String,
    pub location: String,
}

#[axum::debug_handler]
pub async fn get_schedules(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<MonthScheduleQuery>,
) -> Result<Json<Value>, AppError> {
    let service = AvailabilityService::new(Arc::new(RecordStoreClient::new(&state)));

    let days = service
        .month_schedule(&query.doctor, &query.month, &query.location)
        .await
        .map_err(map_scheduling_error)?;

    Ok(Json(json!(days)))
}

#[axum::debug_handler]
pub async fn get_schedule_detail(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<ScheduleDetailQuery>,
) -> Result<Json<Value>, AppError> {
    let service = AvailabilityService::new(Arc::new(RecordStoreClient::new(&state)));

    let slots = service
        .day_schedule(&query.doctor, &query.date, &query.location)
        .await
        .map_err(map_scheduling_error)?;

    Ok(Json(json!(slots)))
}

fn map_scheduling_error(error: SchedulingError) -> AppError {
    match error {
        SchedulingError::InvalidArgument(msg) => AppError::BadRequest(msg),
        SchedulingError::NotFound(msg) => AppError::NotFound(msg),
        other => AppError::Internal(other.to_string()),
    }
}
