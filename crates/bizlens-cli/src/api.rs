//! bizlens API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Serialize;

use bizlens::BusinessInsight;

/// API Client for bizlens
pub struct BizlensClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct BusinessDataRequest<'a> {
    name: &'a str,
    location: &'a str,
}

impl BizlensClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Fetch the full insight (POST /business-data)
    pub async fn fetch_insight(&self, name: &str, location: &str) -> Result<BusinessInsight> {
        let url = format!("{}/business-data", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&BusinessDataRequest { name, location })
            .send()
            .await
            .context("Failed to connect to bizlens API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let insight: BusinessInsight = resp.json().await.context("Failed to parse response")?;

        Ok(insight)
    }

    /// Fetch a fresh headline (GET /regenerate-headline)
    pub async fn regenerate_headline(&self, name: &str, location: &str) -> Result<String> {
        let url = format!("{}/regenerate-headline", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("name", name), ("location", location)])
            .send()
            .await
            .context("Failed to connect to bizlens API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let headline: String = resp.json().await.context("Failed to parse response")?;

        Ok(headline)
    }
}
