//! Album and song reconciliation

use crate::error::ImportError;
use crate::Result;
use shelf_core::{AlbumWithSongs, NormalizedAlbum, ShelfError, StorageContext, UpsertAlbum, UpsertSong};
use tracing::debug;

/// Merges fetched album metadata into storage.
pub struct Reconciler<'a> {
    storage: &'a dyn StorageContext,
}

impl<'a> Reconciler<'a> {
    pub fn new(storage: &'a dyn StorageContext) -> Self {
        Self { storage }
    }

    /// Upsert `data` as the album imported from `original_url`, then its
    /// songs, and return the stored album with songs ordered by title.
    ///
    /// Calling this again with the same URL refreshes the same rows.
    pub async fn reconcile(
        &self,
        original_url: &str,
        data: &NormalizedAlbum,
    ) -> Result<AlbumWithSongs> {
        if data.title.trim().is_empty() || data.artist.trim().is_empty() {
            return Err(ImportError::Reconcile(ShelfError::invalid_input(
                "album title and artist are required",
            )));
        }

        let album = self
            .storage
            .upsert_album(UpsertAlbum {
                title: data.title.clone(),
                artist: data.artist.clone(),
                image_url: data.image_url.clone(),
                link: original_url.to_string(),
            })
            .await?;
        debug!(album_id = %album.id, title = %album.title, "Album upserted");

        let songs: Vec<UpsertSong> = data
            .songs
            .iter()
            .map(|song| UpsertSong {
                title: song.title.clone(),
                link: song.link.clone(),
            })
            .collect();
        if !songs.is_empty() {
            self.storage.upsert_songs(&album.id, &songs).await?;
            debug!(album_id = %album.id, songs = songs.len(), "Songs upserted");
        }

        let stored = self
            .storage
            .get_album_with_songs(&album.id)
            .await?
            .ok_or_else(|| ShelfError::not_found("Album", album.id.as_str()))?;

        Ok(stored)
    }
}
