//! Shelf Storage
//!
//! `SQLite` persistence for imported albums and their songs.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: `albums` and `songs` each own their queries
//! - **Explicit Handles**: callers receive a [`LocalStorageContext`] rather
//!   than reaching for a global connection
//! - **Atomic Upserts**: album refreshes are a single conditional insert,
//!   song batches run inside one transaction
//!
//! # Example
//!
//! ```rust,no_run
//! use shelf_storage::{LocalStorageContext, create_pool, run_migrations};
//! use shelf_core::storage::StorageContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://shelf.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let albums = storage.list_albums(Some(10)).await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod albums;
pub mod songs;

pub use context::LocalStorageContext;
pub use error::StorageError;

pub type Database = LocalStorageContext;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://shelf.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Open a pool and bring its schema up to date
///
/// # Errors
///
/// Returns an error if the connection or a migration fails
pub async fn open(database_url: &str) -> Result<LocalStorageContext, StorageError> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool).await?;
    Ok(LocalStorageContext::new(pool))
}
