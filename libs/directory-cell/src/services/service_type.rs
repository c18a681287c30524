use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use shared_database::provider::DataProvider;

use crate::models::{ServiceTypeRow, ServiceTypeSummary};

pub struct ServiceTypeService {
    provider: Arc<dyn DataProvider>,
}

impl ServiceTypeService {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }

    pub async fn list_service_types(&self) -> Result<Vec<ServiceTypeSummary>> {
        debug!("Fetching appointment types");

        let rows = self
            .provider
            .list(
                "appointment_types",
                &[
                    "name",
                    "default_duration",
                    "description",
                    "full_description",
                    "image",
                ],
                &[],
            )
            .await?;

        let mut service_types = Vec::with_capacity(rows.len());
        for row in rows {
            let row: ServiceTypeRow = serde_json::from_value(row)?;

            service_types.push(ServiceTypeSummary {
                name: row.name,
                default_duration: row.default_duration.unwrap_or(0),
                description: row.description.unwrap_or_default(),
                full_description: row.full_description.unwrap_or_default(),
                image: row.image.unwrap_or_default(),
            });
        }

        Ok(service_types)
    }
}
