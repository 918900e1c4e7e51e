//! Common test utilities and fixtures

#![allow(dead_code)]

use axum::Router;
use shelf_providers::{ProviderConfig, ProviderRegistry};
use shelf_server::{create_router, services::SessionService, state::AppState};
use shelf_storage::Database;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::MockServer;

pub const TEST_SECRET: &str = "test-session-secret";
pub const ALLOWED_EMAIL: &str = "owner@example.com";
pub const SIGN_IN_PATH: &str = "/api/auth/signin";

/// Router over a temporary SQLite file, with both providers pointed at a mock upstream
pub struct TestApp {
    pub router: Router,
    pub db: Arc<Database>,
    pub sessions: Arc<SessionService>,
    pub upstream: MockServer,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let db = Arc::new(
            shelf_storage::open(&db_url)
                .await
                .expect("Failed to open test database"),
        );

        let upstream = MockServer::start().await;
        let providers = Arc::new(
            ProviderRegistry::new(ProviderConfig {
                itunes_base_url: upstream.uri(),
                deezer_base_url: upstream.uri(),
                ..ProviderConfig::default()
            })
            .expect("Failed to build provider registry"),
        );

        let sessions = Arc::new(SessionService::new(
            TEST_SECRET.to_string(),
            1,
            ALLOWED_EMAIL.to_string(),
            SIGN_IN_PATH.to_string(),
        ));

        let app_state = AppState::new(Arc::clone(&db), Arc::clone(&sessions), providers);

        Self {
            router: create_router(app_state),
            db,
            sessions,
            upstream,
            _temp_dir: temp_dir,
        }
    }

    pub fn session_cookie(&self, email: &str) -> String {
        let token = self
            .sessions
            .create_session_token(email)
            .expect("Failed to create session token");
        format!("shelf_session={token}")
    }
}

pub mod fixtures {
    use serde_json::{json, Value};

    pub const DEEZER_URL: &str = "https://www.deezer.com/en/album/302127";

    pub fn deezer_album() -> Value {
        json!({
            "id": 302127,
            "title": "Discovery",
            "artist": { "name": "Daft Punk" },
            "cover_xl": "https://e-cdns-images.dzcdn.net/images/cover/xl.jpg",
            "tracks": { "data": [
                { "title": "One More Time", "link": "https://www.deezer.com/track/3135553" },
                { "title": "Aerodynamic", "link": "https://www.deezer.com/track/3135554" }
            ]}
        })
    }
}
