//! Shelf Album Importer
//!
//! Imports an album from a pasted Apple Music or Deezer URL into storage.
//!
//! # Architecture
//!
//! - `reconcile`: merges normalized metadata into stored album and song rows
//! - `importer`: classify → fetch → reconcile orchestration
//!
//! Both work through an explicitly passed
//! [`StorageContext`](shelf_core::StorageContext), so a request owns its
//! storage handle for the duration of the import.

mod error;

pub mod importer;
pub mod reconcile;

pub use error::ImportError;
pub use importer::AlbumImporter;
pub use reconcile::Reconciler;

pub type Result<T> = std::result::Result<T, ImportError>;
