use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use shared_database::provider::{DataProvider, Filter};

use crate::models::{AddressRow, LocationRow, LocationSummary};

pub struct LocationService {
    provider: Arc<dyn DataProvider>,
}

impl LocationService {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }

    /// List every leaf service location with its display record. Group rows
    /// are organizational and never appear in the listing.
    pub async fn list_locations(&self) -> Result<Vec<LocationSummary>> {
        debug!("Fetching service locations");

        let rows = self
            .provider
            .list(
                "locations",
                &["id", "location_name", "photo"],
                &[Filter::eq("is_group", "false")],
            )
            .await?;

        let mut locations = Vec::with_capacity(rows.len());
        for row in rows {
            let row: LocationRow = serde_json::from_value(row)?;
            let (address, phone) = self.lookup_address(&row.id).await?;

            locations.push(LocationSummary {
                name: row.location_name.clone().unwrap_or_else(|| row.id.clone()),
                id: row.id,
                address,
                phone,
                photo: row.photo.unwrap_or_default(),
            });
        }

        debug!("Found {} service locations", locations.len());
        Ok(locations)
    }

    /// First address linked to the location, joined from its non-empty parts.
    /// No linked address degrades to empty strings.
    async fn lookup_address(&self, location_id: &str) -> Result<(String, String)> {
        let rows = self
            .provider
            .list(
                "addresses",
                &[
                    "address_line1",
                    "address_line2",
                    "city",
                    "state",
                    "country",
                    "phone",
                ],
                &[Filter::eq("location", location_id)],
            )
            .await?;

        let Some(row) = rows.into_iter().next() else {
            return Ok((String::new(), String::new()));
        };
        let row: AddressRow = serde_json::from_value(row)?;

        let parts = [
            row.address_line1,
            row.address_line2,
            row.city,
            row.state,
            row.country,
        ];
        let address = parts
            .into_iter()
            .flatten()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Ok((address, row.phone.unwrap_or_default()))
    }
}
