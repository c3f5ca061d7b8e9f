// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CrawlerConfig;

/// Source of raw page markup for detail pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET the URL and return the response body.
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
impl PageFetcher for reqwest::Client {
    async fn fetch(&self, url: &str) -> Result<String> {
        let text = self.get(url).send().await?.text().await?;
        Ok(text)
    }
}

/// Create a configured asynchronous HTTP client.
///
/// One client is shared by every detail fetch of a run so requests reuse its
/// connection pool.
pub fn create_async_client(config: &CrawlerConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}
