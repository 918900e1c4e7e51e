//! End-to-end import tests: classify → fetch (mocked upstream) → reconcile

mod common;

use common::TestDb;
use shelf_importer::{AlbumImporter, ImportError};
use shelf_providers::{ProviderConfig, ProviderError, ProviderRegistry};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn registry_for(server: &MockServer) -> ProviderRegistry {
    ProviderRegistry::new(ProviderConfig {
        itunes_base_url: server.uri(),
        deezer_base_url: server.uri(),
        ..ProviderConfig::default()
    })
    .unwrap()
}

async fn mount_deezer_album(server: &MockServer, preview_for_first: &str) {
    Mock::given(method("GET"))
        .and(path("/album/302127"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "Discovery",
            "artist": { "name": "Daft Punk" },
            "cover_big": "https://e-cdns-images.dzcdn.net/images/cover/big.jpg",
            "tracks": { "data": [
                { "title": "One More Time", "preview": preview_for_first },
                { "title": "Aerodynamic", "link": "https://www.deezer.com/track/3135554" }
            ]}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_import_deezer_album() {
    let server = MockServer::start().await;
    mount_deezer_album(&server, "https://cdns-preview.dzcdn.net/omt.mp3").await;

    let db = TestDb::new().await;
    let registry = registry_for(&server);
    let importer = AlbumImporter::new(&db.storage, &registry);

    let album = importer
        .import("  https://www.deezer.com/en/album/302127 ")
        .await
        .unwrap();

    assert_eq!(album.album.title, "Discovery");
    assert_eq!(album.album.artist, "Daft Punk");
    assert_eq!(
        album.album.link.as_deref(),
        Some("https://www.deezer.com/en/album/302127")
    );
    assert_eq!(
        album.album.image_url.as_deref(),
        Some("https://e-cdns-images.dzcdn.net/images/cover/big.jpg")
    );
    let titles: Vec<&str> = album.songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Aerodynamic", "One More Time"]);
}

#[tokio::test]
async fn test_reimport_refreshes_single_album() {
    let server = MockServer::start().await;
    mount_deezer_album(&server, "https://cdns-preview.dzcdn.net/omt.mp3").await;

    let db = TestDb::new().await;
    let registry = registry_for(&server);
    let importer = AlbumImporter::new(&db.storage, &registry);

    let first = importer
        .import("https://www.deezer.com/en/album/302127")
        .await
        .unwrap();
    let second = importer
        .import("https://www.deezer.com/en/album/302127")
        .await
        .unwrap();

    assert_eq!(first.album.id, second.album.id);
    assert_eq!(first.songs, second.songs);
    assert_eq!(db.count("albums").await, 1);
    assert_eq!(db.count("songs").await, 2);
}

#[tokio::test]
async fn test_import_itunes_lookup_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup"))
        .and(query_param("id", "1524809890"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultCount": 2,
            "results": [
                {
                    "wrapperType": "collection",
                    "collectionName": "folklore",
                    "artistName": "Taylor Swift",
                    "artworkUrl100": "https://is1-ssl.mzstatic.com/image/thumb/folklore.jpg/100x100bb.jpg"
                },
                { "wrapperType": "track", "trackName": "cardigan" }
            ]
        })))
        .mount(&server)
        .await;

    let db = TestDb::new().await;
    let registry = registry_for(&server);

    let album = AlbumImporter::new(&db.storage, &registry)
        .import("https://itunes.apple.com/lookup?id=1524809890&entity=song")
        .await
        .unwrap();

    assert_eq!(album.album.title, "folklore");
    assert_eq!(
        album.album.image_url.as_deref(),
        Some("https://is1-ssl.mzstatic.com/image/thumb/folklore.jpg/1000x1000bb.jpg")
    );
    assert_eq!(album.songs.len(), 1);
    assert_eq!(album.songs[0].link, None);
}

#[tokio::test]
async fn test_unsupported_url_fetches_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let db = TestDb::new().await;
    let registry = registry_for(&server);

    let err = AlbumImporter::new(&db.storage, &registry)
        .import("not a url")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ImportError::Provider(ProviderError::UnsupportedUrl(_))
    ));
    assert!(err.to_string().contains("Apple Music or Deezer"));
    assert_eq!(db.count("albums").await, 0);
}

#[tokio::test]
async fn test_upstream_failure_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/album/302127"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let db = TestDb::new().await;
    let registry = registry_for(&server);

    let err = AlbumImporter::new(&db.storage, &registry)
        .import("https://www.deezer.com/album/302127")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Deezer lookup failed: 502");
    assert_eq!(db.count("albums").await, 0);
}
