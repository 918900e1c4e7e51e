//! Song types

use super::{AlbumId, SongId};
use serde::{Deserialize, Serialize};

/// A song belonging to an album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub link: Option<String>,
    pub album_id: AlbumId,
}

/// Data for inserting or refreshing a song, keyed by (`title`, album)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertSong {
    pub title: String,
    pub link: Option<String>,
}
