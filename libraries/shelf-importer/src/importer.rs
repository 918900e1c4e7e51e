//! Import orchestration: classify → fetch → reconcile

use crate::reconcile::Reconciler;
use crate::Result;
use shelf_core::{AlbumWithSongs, StorageContext};
use shelf_providers::{classify, ProviderRegistry};
use tracing::{debug, info};

/// Imports a single album URL.
///
/// Cheap to build; construct one per request around that request's storage
/// handle.
pub struct AlbumImporter<'a> {
    storage: &'a dyn StorageContext,
    providers: &'a ProviderRegistry,
}

impl<'a> AlbumImporter<'a> {
    pub fn new(storage: &'a dyn StorageContext, providers: &'a ProviderRegistry) -> Self {
        Self { storage, providers }
    }

    /// Import the album behind `url`.
    ///
    /// The trimmed URL is stored as the album's link so re-importing it
    /// refreshes the same album.
    pub async fn import(&self, url: &str) -> Result<AlbumWithSongs> {
        let url = url.trim();
        let reference = classify(url)?;
        debug!(
            provider = %reference.provider(),
            album_id = reference.album_id(),
            "Classified album URL"
        );

        let data = self.providers.fetch(&reference).await?;
        let album = Reconciler::new(self.storage).reconcile(url, &data).await?;

        info!(
            album_id = %album.album.id,
            title = %album.album.title,
            artist = %album.album.artist,
            songs = album.songs.len(),
            "Imported album"
        );

        Ok(album)
    }
}
