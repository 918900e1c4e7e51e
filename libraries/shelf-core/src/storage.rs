//! Storage trait for the album catalog

use crate::error::Result;
use crate::types::{Album, AlbumId, AlbumSummary, AlbumWithSongs, Song, UpsertAlbum, UpsertSong};
use async_trait::async_trait;

/// Storage context providing access to album and song persistence
///
/// Passed explicitly to whatever needs the database so callers never reach
/// for a process-wide client.
#[async_trait]
pub trait StorageContext: Send + Sync {
    // ========================================================================
    // Albums
    // ========================================================================

    /// Get album by ID
    async fn get_album_by_id(&self, id: &AlbumId) -> Result<Option<Album>>;

    /// Find the album previously imported from `link`
    async fn find_album_by_link(&self, link: &str) -> Result<Option<Album>>;

    /// Insert a new album or refresh the one matching by link, then by
    /// (`title`, `artist`), in a single atomic statement.
    ///
    /// A link match refreshes title, artist and image; a (`title`, `artist`)
    /// match refreshes link and image. A missing image never clears a stored one.
    async fn upsert_album(&self, album: UpsertAlbum) -> Result<Album>;

    /// List albums newest first with their song counts
    async fn list_albums(&self, limit: Option<u32>) -> Result<Vec<AlbumSummary>>;

    /// Get an album with its songs ordered by title
    async fn get_album_with_songs(&self, id: &AlbumId) -> Result<Option<AlbumWithSongs>>;

    // ========================================================================
    // Songs
    // ========================================================================

    /// Get the songs of an album ordered by title
    async fn get_songs_by_album(&self, album_id: &AlbumId) -> Result<Vec<Song>>;

    /// Insert or refresh songs keyed by (`title`, album) as one transaction.
    ///
    /// Either every song is written or none is.
    async fn upsert_songs(&self, album_id: &AlbumId, songs: &[UpsertSong]) -> Result<()>;
}
