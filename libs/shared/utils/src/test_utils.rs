use std::sync::Arc;

use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;

pub struct TestConfig {
    pub record_store_url: String,
    pub record_store_api_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            record_store_url: "http://localhost:54321".to_string(),
            record_store_api_key: "test-api-key".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            record_store_url: self.record_store_url.clone(),
            record_store_api_key: self.record_store_api_key.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }

    /// Config pointed at a mock record store.
    pub fn for_store(url: &str) -> AppConfig {
        AppConfig {
            record_store_url: url.to_string(),
            record_store_api_key: "test-api-key".to_string(),
        }
    }
}

/// Canned record-store rows for mock servers.
pub struct MockStoreRecords;

impl MockStoreRecords {
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn location(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "location_name": name,
            "photo": "/files/clinic-front.png",
            "is_group": false
        })
    }

    pub fn bare_location(id: &str) -> Value {
        json!({ "id": id })
    }

    pub fn address(location: &str) -> Value {
        json!({
            "location": location,
            "address_line1": "12 Harbor Road",
            "address_line2": "",
            "city": "Port Hampton",
            "state": "Coastal Province",
            "country": "Atlantis",
            "phone": "+1 555 0100"
        })
    }

    pub fn practitioner(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "practitioner_name": name,
            "image": "/files/portrait.png",
            "full_description": "General practitioner"
        })
    }

    pub fn appointment_type(name: &str, duration: i64) -> Value {
        json!({
            "name": name,
            "default_duration": duration,
            "description": "Routine visit",
            "full_description": "Routine outpatient visit",
            "image": "/files/service.png"
        })
    }

    pub fn schedule_template(id: &str, slots: Vec<Value>) -> Value {
        json!({
            "id": id,
            "disabled": false,
            "time_slots": slots
        })
    }

    pub fn disabled_template(id: &str, slots: Vec<Value>) -> Value {
        json!({
            "id": id,
            "disabled": true,
            "time_slots": slots
        })
    }

    pub fn time_slot(day: &str, from_time: &str, to_time: &str) -> Value {
        json!({
            "day": day,
            "from_time": from_time,
            "to_time": to_time
        })
    }

    pub fn template_link(practitioner: &str, location: &str, template: &str) -> Value {
        json!({
            "practitioner": practitioner,
            "location": location,
            "template": template
        })
    }

    pub fn booking(start_time: Value, duration: i64) -> Value {
        json!({
            "start_time": start_time,
            "duration": duration,
            "status": "Open"
        })
    }
}
