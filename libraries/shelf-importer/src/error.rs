//! Error types for the importer

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Classification or upstream fetch failed
    #[error(transparent)]
    Provider(#[from] shelf_providers::ProviderError),

    /// Writing the album or its songs failed
    #[error("Failed to save album: {0}")]
    Reconcile(#[from] shelf_core::ShelfError),
}
