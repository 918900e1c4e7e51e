//! Deezer album client.

use crate::error::{ProviderError, Result};
use crate::fetcher::{non_empty, AlbumFetcher};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use shelf_core::{NormalizedAlbum, NormalizedSong, Provider};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct DeezerAlbum {
    title: Option<String>,
    artist: Option<DeezerArtist>,
    cover_xl: Option<String>,
    cover_big: Option<String>,
    cover_medium: Option<String>,
    cover: Option<String>,
    tracks: Option<DeezerTracks>,
    /// Deezer reports unknown ids as HTTP 200 with an error object
    error: Option<DeezerApiError>,
}

#[derive(Debug, Deserialize)]
struct DeezerArtist {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeezerTracks {
    #[serde(default)]
    data: Vec<DeezerTrack>,
}

#[derive(Debug, Deserialize)]
struct DeezerTrack {
    title: Option<String>,
    link: Option<String>,
    preview: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeezerApiError {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: Option<String>,
}

/// Client for `GET /album/<id>`.
pub struct DeezerClient {
    http: Client,
    base_url: String,
}

impl DeezerClient {
    pub(crate) fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl AlbumFetcher for DeezerClient {
    fn provider(&self) -> Provider {
        Provider::Deezer
    }

    async fn fetch(&self, album_id: &str) -> Result<NormalizedAlbum> {
        let url = format!("{}/album/{}", self.base_url, album_id);
        debug!(url = %url, "Fetching Deezer album");

        let response = self
            .http
            .get(&url)
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UpstreamFetch {
                provider: Provider::Deezer,
                status: status.as_u16(),
            });
        }

        let album: DeezerAlbum = response.json().await.map_err(|e| ProviderError::Parse {
            provider: Provider::Deezer,
            message: e.to_string(),
        })?;

        normalize(album)
    }
}

fn normalize(album: DeezerAlbum) -> Result<NormalizedAlbum> {
    if let Some(error) = album.error {
        debug!(kind = ?error.kind, message = ?error.message, "Deezer returned an error payload");
        return Err(ProviderError::AlbumNotFound {
            provider: Provider::Deezer,
        });
    }

    let title = non_empty(album.title).ok_or_else(|| invalid("missing title"))?;
    let artist = album
        .artist
        .and_then(|artist| non_empty(artist.name))
        .ok_or_else(|| invalid("missing artist.name"))?;

    let image_url = non_empty(album.cover_xl)
        .or_else(|| non_empty(album.cover_big))
        .or_else(|| non_empty(album.cover_medium))
        .or_else(|| non_empty(album.cover));

    let songs = album
        .tracks
        .map(|tracks| tracks.data)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|track| {
            let Some(track_title) = non_empty(track.title) else {
                warn!(album = %title, "Skipping Deezer track without a title");
                return None;
            };
            let link = non_empty(track.link).or_else(|| non_empty(track.preview));
            Some(NormalizedSong {
                title: track_title,
                link,
            })
        })
        .collect();

    Ok(NormalizedAlbum {
        title,
        artist,
        image_url,
        songs,
    })
}

fn invalid(reason: &str) -> ProviderError {
    ProviderError::InvalidAlbum {
        provider: Provider::Deezer,
        reason: reason.to_string(),
    }
}
