//! Brreg API client
//!
//! HTTP client for the Brønnøysund Register Centre's Enhetsregisteret API.
//! One upstream request per call, no retries. An upstream 404 is a normal
//! outcome (`Ok(None)`), any other non-success status is an error.

use super::types::{Enhet, EnhetSearchPage, RollerResponse};
use super::RegistryLookup;
use crate::config::BrregConfig;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

/// Page size for name searches
pub const SEARCH_PAGE_SIZE: usize = 20;

/// Brreg API client
pub struct BrregClient {
    http: Client,
    base_url: Url,
}

impl BrregClient {
    /// Client against the public API with default timeout
    pub fn new() -> Result<Self> {
        Self::from_config(&BrregConfig::default())
    }

    pub fn from_config(config: &BrregConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid Brreg base URL '{}'", config.base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Brreg base URL '{}' cannot carry a path", config.base_url));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Brreg base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` and decode the JSON body. `Ok(None)` on 404.
    async fn get_optional<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        let response = self
            .http
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%url, "Brreg returned 404");
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "Brreg API error {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            ));
        }

        response
            .json()
            .await
            .map(Some)
            .with_context(|| format!("Failed to parse response from {}", url))
    }

    /// Unit details by organization number
    pub async fn get_enhet(&self, orgnr: &str) -> Result<Option<Enhet>> {
        let url = self.endpoint(&["enheter", orgnr])?;
        self.get_optional(url).await
    }

    /// All role groups for a unit
    pub async fn get_roller(&self, orgnr: &str) -> Result<Option<RollerResponse>> {
        let url = self.endpoint(&["enheter", orgnr, "roller"])?;
        self.get_optional(url).await
    }

    /// Units whose name matches `query`
    pub async fn search(&self, query: &str, size: usize) -> Result<Vec<Enhet>> {
        let mut url = self.endpoint(&["enheter"])?;
        url.query_pairs_mut()
            .append_pair("navn", query)
            .append_pair("size", &size.to_string());

        let page: Option<EnhetSearchPage> = self.get_optional(url).await?;
        page.map(EnhetSearchPage::into_enheter)
            .ok_or_else(|| anyhow!("Brreg search endpoint returned 404"))
    }
}

#[async_trait]
impl RegistryLookup for BrregClient {
    async fn fetch_enhet(&self, orgnr: &str) -> Result<Option<Enhet>> {
        self.get_enhet(orgnr).await
    }

    async fn fetch_roller(&self, orgnr: &str) -> Result<Option<RollerResponse>> {
        self.get_roller(orgnr).await
    }

    async fn search_enheter(&self, query: &str) -> Result<Vec<Enhet>> {
        self.search(query, SEARCH_PAGE_SIZE).await
    }
}
