//! Shared fixtures for importer tests

#![allow(dead_code)]

use shelf_core::{NormalizedAlbum, NormalizedSong};
use shelf_storage::LocalStorageContext;
use tempfile::TempDir;

/// Real SQLite file with migrations applied, removed on drop
pub struct TestDb {
    pub storage: LocalStorageContext,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let storage = shelf_storage::open(&db_url)
            .await
            .expect("Failed to open test database");

        Self {
            storage,
            _temp_dir: temp_dir,
        }
    }

    pub async fn count(&self, table: &str) -> i64 {
        count_from_listing(&self.storage, table).await
    }
}

async fn count_from_listing(storage: &LocalStorageContext, table: &str) -> i64 {
    let albums = shelf_core::StorageContext::list_albums(storage, None)
        .await
        .expect("Failed to list albums");
    match table {
        "albums" => albums.len() as i64,
        "songs" => albums.iter().map(|a| a.song_count).sum(),
        other => panic!("unknown table {other}"),
    }
}

pub fn discovery(songs: &[(&str, Option<&str>)]) -> NormalizedAlbum {
    NormalizedAlbum {
        title: "Discovery".to_string(),
        artist: "Daft Punk".to_string(),
        image_url: Some("https://e-cdns-images.dzcdn.net/images/cover/xl.jpg".to_string()),
        songs: songs
            .iter()
            .map(|(title, link)| NormalizedSong::new(*title, link.map(str::to_string)))
            .collect(),
    }
}
