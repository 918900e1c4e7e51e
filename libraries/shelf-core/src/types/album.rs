//! Album types

use super::{AlbumId, Song};
use serde::{Deserialize, Serialize};

/// A stored album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub image_url: Option<String>,
    /// The URL the album was imported from, unique when present
    pub link: Option<String>,
    pub created_at: String,
}

/// An album together with its songs, ordered by title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumWithSongs {
    #[serde(flatten)]
    pub album: Album,
    pub songs: Vec<Song>,
}

/// Row of the albums listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumSummary {
    #[serde(flatten)]
    pub album: Album,
    pub song_count: i64,
}

/// Data for inserting or refreshing an album
///
/// Matches an existing row by `link` first, then by (`title`, `artist`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertAlbum {
    pub title: String,
    pub artist: String,
    pub image_url: Option<String>,
    pub link: String,
}
