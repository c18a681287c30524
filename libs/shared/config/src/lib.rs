use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub record_store_url: String,
    pub record_store_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            record_store_url: env::var("RECORD_STORE_URL")
                .unwrap_or_else(|_| {
                    warn!("RECORD_STORE_URL not set, using empty value");
                    String::new()
                }),
            record_store_api_key: env::var("RECORD_STORE_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("RECORD_STORE_API_KEY not set, using empty value");
                    String::new()
                }),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.record_store_url.is_empty() && !self.record_store_api_key.is_empty()
    }
}
