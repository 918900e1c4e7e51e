//! Shelf Core
//!
//! Domain types, traits, and error handling shared by every Shelf crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `Song`, and the transient `NormalizedAlbum`
//!   and `ParsedReference` values passed through the import pipeline
//! - **Storage Trait**: `StorageContext`, the handle the importer writes through
//! - **Error Handling**: Unified `ShelfError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use shelf_core::types::{NormalizedAlbum, NormalizedSong, ParsedReference, Provider};
//!
//! let reference = ParsedReference::Deezer { album_id: "302127".to_string() };
//! assert_eq!(reference.provider(), Provider::Deezer);
//!
//! let album = NormalizedAlbum {
//!     title: "Discovery".to_string(),
//!     artist: "Daft Punk".to_string(),
//!     image_url: None,
//!     songs: vec![NormalizedSong::new("One More Time", None)],
//! };
//! assert_eq!(album.songs.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ShelfError};
pub use storage::StorageContext;

pub use types::{
    Album, AlbumId, AlbumSummary, AlbumWithSongs, NormalizedAlbum, NormalizedSong,
    ParsedReference, Provider, Song, SongId, UpsertAlbum, UpsertSong,
};
