//! Provider dispatch.

use crate::deezer::DeezerClient;
use crate::error::{ProviderError, Result};
use crate::itunes::ItunesClient;
use async_trait::async_trait;
use reqwest::Client;
use shelf_core::{NormalizedAlbum, ParsedReference, Provider};
use std::time::Duration;

/// Fetch an album from one provider and normalize it.
#[async_trait]
pub trait AlbumFetcher: Send + Sync {
    /// The provider this fetcher talks to.
    fn provider(&self) -> Provider;

    /// Fetch album `album_id` with its tracks.
    async fn fetch(&self, album_id: &str) -> Result<NormalizedAlbum>;
}

/// Endpoints and HTTP settings for the upstream APIs.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub itunes_base_url: String,
    pub deezer_base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            itunes_base_url: "https://itunes.apple.com".to_string(),
            deezer_base_url: "https://api.deezer.com".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("Shelf/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// One fetcher per provider, selected by a classified URL.
pub struct ProviderRegistry {
    itunes: ItunesClient,
    deezer: DeezerClient,
}

impl ProviderRegistry {
    /// Build both clients over a shared HTTP connection pool.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            itunes: ItunesClient::new(http.clone(), normalize_base_url(&config.itunes_base_url)?),
            deezer: DeezerClient::new(http, normalize_base_url(&config.deezer_base_url)?),
        })
    }

    /// The fetcher responsible for `provider`.
    pub fn fetcher(&self, provider: Provider) -> &dyn AlbumFetcher {
        match provider {
            Provider::Itunes => &self.itunes,
            Provider::Deezer => &self.deezer,
        }
    }

    /// Fetch the album a classified URL points at.
    pub async fn fetch(&self, reference: &ParsedReference) -> Result<NormalizedAlbum> {
        self.fetcher(reference.provider())
            .fetch(reference.album_id())
            .await
    }
}

fn normalize_base_url(url: &str) -> Result<String> {
    if url.is_empty() {
        return Err(ProviderError::InvalidBaseUrl("URL cannot be empty".into()));
    }

    let url = url.trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ProviderError::InvalidBaseUrl(format!(
            "{url} must start with http:// or https://"
        )));
    }

    Ok(url)
}

/// Treat empty strings from upstream payloads as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
