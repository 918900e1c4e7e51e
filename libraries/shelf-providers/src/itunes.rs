//! Apple Music / iTunes lookup client.

use crate::error::{ProviderError, Result};
use crate::fetcher::{non_empty, AlbumFetcher};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use shelf_core::{NormalizedAlbum, NormalizedSong, Provider};
use tracing::{debug, warn};

const THUMBNAIL_SIZE: &str = "100x100";
const ARTWORK_SIZE: &str = "1000x1000";

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    results: Vec<LookupEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupEntity {
    wrapper_type: Option<String>,
    collection_name: Option<String>,
    artist_name: Option<String>,
    #[serde(rename = "artworkUrl100")]
    artwork_url_100: Option<String>,
    track_name: Option<String>,
    track_view_url: Option<String>,
    preview_url: Option<String>,
}

/// Client for `GET /lookup?id=<id>&entity=song`.
pub struct ItunesClient {
    http: Client,
    base_url: String,
}

impl ItunesClient {
    pub(crate) fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl AlbumFetcher for ItunesClient {
    fn provider(&self) -> Provider {
        Provider::Itunes
    }

    async fn fetch(&self, album_id: &str) -> Result<NormalizedAlbum> {
        let url = format!("{}/lookup", self.base_url);
        debug!(url = %url, album_id, "Fetching iTunes album");

        // Catalogs change, always ask for a fresh copy
        let response = self
            .http
            .get(&url)
            .query(&[("id", album_id), ("entity", "song")])
            .header(header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::UpstreamFetch {
                provider: Provider::Itunes,
                status: status.as_u16(),
            });
        }

        let lookup: LookupResponse = response.json().await.map_err(|e| ProviderError::Parse {
            provider: Provider::Itunes,
            message: e.to_string(),
        })?;

        normalize(lookup)
    }
}

fn normalize(lookup: LookupResponse) -> Result<NormalizedAlbum> {
    let mut album = None;
    let mut tracks = Vec::new();
    for entity in lookup.results {
        match entity.wrapper_type.as_deref() {
            Some("collection") if album.is_none() => album = Some(entity),
            Some("track") => tracks.push(entity),
            _ => {}
        }
    }

    let album = album.ok_or(ProviderError::AlbumNotFound {
        provider: Provider::Itunes,
    })?;

    let title = non_empty(album.collection_name).ok_or_else(|| invalid("missing collectionName"))?;
    let artist = non_empty(album.artist_name).ok_or_else(|| invalid("missing artistName"))?;
    let image_url = non_empty(album.artwork_url_100).map(|url| upscale_artwork(&url));

    let songs = tracks
        .into_iter()
        .filter_map(|track| {
            let Some(track_title) = non_empty(track.track_name) else {
                warn!(album = %title, "Skipping iTunes track without a name");
                return None;
            };
            let link = non_empty(track.track_view_url).or_else(|| non_empty(track.preview_url));
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
        provider: Provider::Itunes,
        reason: reason.to_string(),
    }
}

/// Swap the `100x100` thumbnail size token for `1000x1000`.
///
/// Only the last occurrence is replaced, since the size token is the final
/// path segment of an artwork URL.
pub fn upscale_artwork(url: &str) -> String {
    match url.rfind(THUMBNAIL_SIZE) {
        Some(pos) => format!(
            "{}{}{}",
            &url[..pos],
            ARTWORK_SIZE,
            &url[pos + THUMBNAIL_SIZE.len()..]
        ),
        None => url.to_string(),
    }
}
