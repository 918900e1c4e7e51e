/// Shared application state
use crate::services::SessionService;
use shelf_providers::ProviderRegistry;
use shelf_storage::Database;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Holds only immutable handles; each request builds its own importer around them.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub sessions: Arc<SessionService>,
    pub providers: Arc<ProviderRegistry>,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        sessions: Arc<SessionService>,
        providers: Arc<ProviderRegistry>,
    ) -> Self {
        Self {
            db,
            sessions,
            providers,
        }
    }
}
