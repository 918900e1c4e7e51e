/// Albums API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shelf_core::{AlbumSummary, AlbumWithSongs, StorageContext};
use shelf_importer::AlbumImporter;

/// Returned for any request body without a usable `url`
pub const IMPORT_USAGE: &str = "Provide { url: string }";

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub album: AlbumWithSongs,
}

#[derive(Debug, Deserialize)]
pub struct AlbumQuery {
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct AlbumsResponse {
    pub albums: Vec<AlbumSummary>,
}

/// POST /api/albums/import
/// Classify the URL, fetch the album upstream and store it with its songs
pub async fn import_album(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Json<ImportResponse>> {
    let url = match payload {
        Ok(Json(ImportRequest { url: Some(url) })) if !url.trim().is_empty() => url,
        Ok(_) => return Err(ServerError::BadRequest(IMPORT_USAGE.to_string())),
        Err(rejection) => {
            tracing::debug!("Rejected import body: {}", rejection);
            return Err(ServerError::BadRequest(IMPORT_USAGE.to_string()));
        }
    };

    let importer = AlbumImporter::new(app_state.db.as_ref(), app_state.providers.as_ref());
    match importer.import(&url).await {
        Ok(album) => Ok(Json(ImportResponse { album })),
        Err(e) => {
            tracing::error!(url = %url.trim(), "Album import failed: {}", e);
            Err(ServerError::ImportFailed(e.to_string()))
        }
    }
}

/// GET /api/albums
pub async fn list_albums(
    State(app_state): State<AppState>,
    Query(query): Query<AlbumQuery>,
) -> Result<Json<AlbumsResponse>> {
    let albums = app_state.db.list_albums(query.limit).await?;
    Ok(Json(AlbumsResponse { albums }))
}
