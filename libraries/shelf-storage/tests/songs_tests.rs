//! Integration tests for the songs vertical slice
//!
//! - Batch upserts keyed by (title, album)
//! - Link refreshes leave other songs untouched
//! - A failing row rolls back the whole batch


use shelf_core::storage::StorageContext;
use test_helpers::*;

#[tokio::test]
async fn test_upsert_batch_creates_songs_ordered_by_title() {
    let test_db = TestDb::new().await;
    let storage = test_db.storage();

    let album = storage
        .upsert_album(album_input("Discovery", "Daft Punk", "https://www.deezer.com/album/302127"))
        .await
        .unwrap();

    storage
        .upsert_songs(
            &album.id,
            &[
                song_input("One More Time", Some("https://www.deezer.com/track/3135553")),
                song_input("aerodynamic", None),
                song_input("Digital Love", Some("https://www.deezer.com/track/3135555")),
            ],
        )
        .await
        .expect("Failed to upsert songs");

    let songs = storage.get_songs_by_album(&album.id).await.unwrap();
    let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["aerodynamic", "Digital Love", "One More Time"]);
    assert!(songs.iter().all(|s| s.album_id == album.id));
}

#[tokio::test]
async fn test_rerun_updates_only_changed_link() {
    let test_db = TestDb::new().await;
    let storage = test_db.storage();

    let album = storage
        .upsert_album(album_input("Discovery", "Daft Punk", "https://www.deezer.com/album/302127"))
        .await
        .unwrap();

    storage
        .upsert_songs(
            &album.id,
            &[
                song_input("One More Time", Some("https://a.example/1")),
                song_input("Aerodynamic", Some("https://a.example/2")),
            ],
        )
        .await
        .unwrap();
    let before = storage.get_songs_by_album(&album.id).await.unwrap();

    storage
        .upsert_songs(
            &album.id,
            &[
                song_input("One More Time", Some("https://b.example/1")),
                song_input("Aerodynamic", Some("https://a.example/2")),
            ],
        )
        .await
        .unwrap();
    let after = storage.get_songs_by_album(&album.id).await.unwrap();

    assert_eq!(after.len(), 2);
    assert_eq!(count_rows(test_db.pool(), "songs").await, 2);

    let aerodynamic_before = before.iter().find(|s| s.title == "Aerodynamic").unwrap();
    let aerodynamic_after = after.iter().find(|s| s.title == "Aerodynamic").unwrap();
    assert_eq!(aerodynamic_before, aerodynamic_after);

    let omt_before = before.iter().find(|s| s.title == "One More Time").unwrap();
    let omt_after = after.iter().find(|s| s.title == "One More Time").unwrap();
    assert_eq!(omt_before.id, omt_after.id);
    assert_eq!(omt_after.link.as_deref(), Some("https://b.example/1"));
}

#[tokio::test]
async fn test_missing_link_keeps_stored_link() {
    let test_db = TestDb::new().await;
    let storage = test_db.storage();

    let album = storage
        .upsert_album(album_input("Discovery", "Daft Punk", "https://www.deezer.com/album/302127"))
        .await
        .unwrap();

    storage
        .upsert_songs(&album.id, &[song_input("Veridis Quo", Some("https://a.example/vq"))])
        .await
        .unwrap();
    storage
        .upsert_songs(&album.id, &[song_input("Veridis Quo", None)])
        .await
        .unwrap();

    let songs = storage.get_songs_by_album(&album.id).await.unwrap();
    assert_eq!(songs[0].link.as_deref(), Some("https://a.example/vq"));
}

#[tokio::test]
async fn test_failing_batch_persists_nothing() {
    let test_db = TestDb::new().await;
    let storage = test_db.storage();

    let album = storage
        .upsert_album(album_input("Discovery", "Daft Punk", "https://www.deezer.com/album/302127"))
        .await
        .unwrap();

    // The empty title violates the schema's CHECK constraint mid-batch
    let result = storage
        .upsert_songs(
            &album.id,
            &[
                song_input("One More Time", None),
                song_input("Aerodynamic", None),
                song_input("", None),
                song_input("Digital Love", None),
            ],
        )
        .await;

    assert!(result.is_err(), "Batch with an invalid song should fail");
    assert_eq!(count_rows(test_db.pool(), "songs").await, 0);
    assert!(storage.get_songs_by_album(&album.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_songs_scoped_to_album() {
    let test_db = TestDb::new().await;
    let storage = test_db.storage();

    let homework = storage
        .upsert_album(album_input("Homework", "Daft Punk", "https://www.deezer.com/album/1"))
        .await
        .unwrap();
    let discovery = storage
        .upsert_album(album_input("Discovery", "Daft Punk", "https://www.deezer.com/album/2"))
        .await
        .unwrap();

    // Same title on two albums is two songs
    storage
        .upsert_songs(&homework.id, &[song_input("Intro", None)])
        .await
        .unwrap();
    storage
        .upsert_songs(&discovery.id, &[song_input("Intro", None)])
        .await
        .unwrap();

    assert_eq!(count_rows(test_db.pool(), "songs").await, 2);
    assert_eq!(storage.get_songs_by_album(&homework.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_songs_for_unknown_album_rejected() {
    let test_db = TestDb::new().await;

    let result = test_db
        .storage()
        .upsert_songs(
            &shelf_core::AlbumId::new("missing"),
            &[song_input("Orphan", None)],
        )
        .await;

    assert!(result.is_err(), "Foreign key should reject songs without an album");
    assert_eq!(count_rows(test_db.pool(), "songs").await, 0);
}
