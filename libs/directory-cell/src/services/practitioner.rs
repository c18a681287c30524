use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use shared_database::provider::DataProvider;

use crate::models::{PractitionerRow, PractitionerSummary};

pub struct PractitionerService {
    provider: Arc<dyn DataProvider>,
}

impl PractitionerService {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }

    pub async fn list_practitioners(&self) -> Result<Vec<PractitionerSummary>> {
        debug!("Fetching practitioners");

        let rows = self
            .provider
            .list(
                "practitioners",
                &["id", "practitioner_name", "image", "full_description"],
                &[],
            )
            .await?;

        let mut practitioners = Vec::with_capacity(rows.len());
        for row in rows {
            let row: PractitionerRow = serde_json::from_value(row)?;

            practitioners.push(PractitionerSummary {
                name: row
                    .practitioner_name
                    .clone()
                    .unwrap_or_else(|| row.id.clone()),
                id: row.id,
                photo: row.image.unwrap_or_default(),
                full_description: row.full_description.unwrap_or_default(),
            });
        }

        Ok(practitioners)
    }
}
