//! HTTP partition source backed by reqwest.

use super::{DataSource, LoaderError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub struct HttpSource {
    client: Client,
    base_url: Url,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, LoaderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("rollcall/0.1")
            .build()
            .map_err(|e| LoaderError::Config(e.to_string()))?;
        let base_url = Url::parse(base_url).map_err(|e| LoaderError::Config(e.to_string()))?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, LoaderError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| LoaderError::Config(e.to_string()))?;
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LoaderError::Fetch(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(LoaderError::Fetch(format!(
                "{} returned {}",
                url,
                resp.status()
            )));
        }
        let body = resp
            .bytes()
            .await
            .map_err(|e| LoaderError::Fetch(e.to_string()))?;
        Ok(body.to_vec())
    }
}
