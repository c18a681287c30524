use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE, RANGE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::provider::{DataProvider, Filter};

/// HTTP client for the host application's record store REST surface.
pub struct RecordStoreClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RecordStoreClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.record_store_url.clone(),
            api_key: config.record_store_api_key.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert("apikey", HeaderValue::from_str(&self.api_key).unwrap());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        headers
    }

    async fn request<T>(&self, method: Method, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let response = self
            .client
            .request(method, &url)
            .headers(self.get_headers())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Record store error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => anyhow!("Record store rejected credentials: {}", error_text),
                404 => anyhow!("Resource not found: {}", error_text),
                _ => anyhow!("Record store error ({}): {}", status, error_text),
            });
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }

    fn collection_path(kind: &str, fields: &[&str], filters: &[Filter]) -> String {
        let mut params = Vec::new();

        if !fields.is_empty() {
            params.push(format!("select={}", fields.join(",")));
        }
        for filter in filters {
            params.push(filter.to_query());
        }

        if params.is_empty() {
            format!("/rest/v1/{}", kind)
        } else {
            format!("/rest/v1/{}?{}", kind, params.join("&"))
        }
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DataProvider for RecordStoreClient {
    async fn list(&self, kind: &str, fields: &[&str], filters: &[Filter]) -> Result<Vec<Value>> {
        let path = Self::collection_path(kind, fields, filters);
        self.request(Method::GET, &path).await
    }

    async fn get_value(
        &self,
        kind: &str,
        filters: &[Filter],
        field: &str,
    ) -> Result<Option<Value>> {
        let mut path = Self::collection_path(kind, &[field], filters);
        path.push_str("&limit=1");

        let rows: Vec<Value> = self.request(Method::GET, &path).await?;
        Ok(rows.into_iter().next().and_then(|row| row.get(field).cloned()))
    }

    async fn get_record(&self, kind: &str, id: &str) -> Result<Option<Value>> {
        let path = format!("/rest/v1/{}?id=eq.{}&limit=1", kind, id);

        let rows: Vec<Value> = self.request(Method::GET, &path).await?;
        Ok(rows.into_iter().next())
    }

    async fn count(&self, kind: &str, filters: &[Filter]) -> Result<u64> {
        let path = Self::collection_path(kind, &["id"], filters);
        let url = format!("{}{}", self.base_url, path);
        debug!("Counting records at {}", url);

        let mut headers = self.get_headers();
        headers.insert("Prefer", HeaderValue::from_static("count=exact"));
        headers.insert(RANGE, HeaderValue::from_static("0-0"));

        let response = self.client.get(&url).headers(headers).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("Record store error ({}): {}", status, error_text);
            return Err(anyhow!("Record store error ({}): {}", status, error_text));
        }

        // Total arrives as the denominator of the content-range header,
        // e.g. "0-0/42"; an unknown total ("*") counts as zero.
        let total = response
            .headers()
            .get("content-range")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.rsplit('/').next())
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Record store response missing content-range header"))?;

        if total == "*" {
            return Ok(0);
        }

        Ok(total.parse()?)
    }
}
