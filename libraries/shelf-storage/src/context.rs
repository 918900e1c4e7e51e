use crate::{albums, songs};
use async_trait::async_trait;
use shelf_core::{error::Result, storage::StorageContext, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    // Albums
    async fn get_album_by_id(&self, id: &AlbumId) -> Result<Option<Album>> {
        albums::get_by_id(&self.pool, id).await
    }

    async fn find_album_by_link(&self, link: &str) -> Result<Option<Album>> {
        albums::find_by_link(&self.pool, link).await
    }

    async fn upsert_album(&self, album: UpsertAlbum) -> Result<Album> {
        albums::upsert(&self.pool, album).await
    }

    async fn list_albums(&self, limit: Option<u32>) -> Result<Vec<AlbumSummary>> {
        albums::list_with_song_counts(&self.pool, limit).await
    }

    async fn get_album_with_songs(&self, id: &AlbumId) -> Result<Option<AlbumWithSongs>> {
        let Some(album) = albums::get_by_id(&self.pool, id).await? else {
            return Ok(None);
        };
        let songs = songs::get_by_album(&self.pool, id).await?;
        Ok(Some(AlbumWithSongs { album, songs }))
    }

    // Songs
    async fn get_songs_by_album(&self, album_id: &AlbumId) -> Result<Vec<Song>> {
        songs::get_by_album(&self.pool, album_id).await
    }

    async fn upsert_songs(&self, album_id: &AlbumId, songs: &[UpsertSong]) -> Result<()> {
        songs::upsert_batch(&self.pool, album_id, songs).await
    }
}
