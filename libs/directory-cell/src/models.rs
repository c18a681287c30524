use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSummary {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub photo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PractitionerSummary {
    pub id: String,
    pub name: String,
    pub photo: String,
    pub full_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceTypeSummary {
    pub name: String,
    pub default_duration: i64,
    pub description: String,
    pub full_description: String,
    pub image: String,
}

// Projections of host records. Absent optional fields take per-field defaults
// when the display records are assembled.

#[derive(Debug, Clone, Deserialize)]
pub struct LocationRow {
    pub id: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressRow {
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PractitionerRow {
    pub id: String,
    #[serde(default)]
    pub practitioner_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceTypeRow {
    pub name: String,
    #[serde(default)]
    pub default_duration: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}
