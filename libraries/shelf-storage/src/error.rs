/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for shelf_core::ShelfError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Database(e) => e.into(),
            StorageError::Migration(e) => shelf_core::ShelfError::storage(e.to_string()),
        }
    }
}
