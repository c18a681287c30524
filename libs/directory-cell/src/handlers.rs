use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_database::store::RecordStoreClient;
use shared_models::error::AppError;

use crate::services::{
    location::LocationService, practitioner::PractitionerService,
    service_type::ServiceTypeService,
};

#[axum::debug_handler]
pub async fn get_locations(State(state): State<Arc<AppConfig>>) -> Result<Json<Value>, AppError> {
    let service = LocationService::new(Arc::new(RecordStoreClient::new(&state)));

    let locations = service
        .list_locations()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!(locations)))
}

#[axum::debug_handler]
pub async fn get_services(State(state): State<Arc<AppConfig>>) -> Result<Json<Value>, AppError> {
    let service = ServiceTypeService::new(Arc::new(RecordStoreClient::new(&state)));

    let service_types = service
        .list_service_types()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!(service_types)))
}

#[axum::debug_handler]
pub async fn get_doctors(State(state): State<Arc<AppConfig>>) -> Result<Json<Value>, AppError> {
    let service = PractitionerService::new(Arc::new(RecordStoreClient::new(&state)));

    let practitioners = service
        .list_practitioners()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!(practitioners)))
}
