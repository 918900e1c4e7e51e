//! Shelf Providers
//!
//! Turns a pasted album URL into provider-agnostic album metadata.
//!
//! # Features
//!
//! - **Classification**: recognizes Apple Music / iTunes and Deezer album URLs
//! - **Fetching**: one [`AlbumFetcher`] per provider, normalizing the public
//!   API payload into a [`NormalizedAlbum`](shelf_core::NormalizedAlbum)
//!
//! # Example
//!
//! ```ignore
//! use shelf_providers::{classify, ProviderConfig, ProviderRegistry};
//!
//! let registry = ProviderRegistry::new(ProviderConfig::default())?;
//! let reference = classify("https://www.deezer.com/en/album/302127")?;
//! let album = registry.fetch(&reference).await?;
//! println!("{} - {} ({} songs)", album.artist, album.title, album.songs.len());
//! ```

mod classify;
mod deezer;
mod error;
mod fetcher;
mod itunes;

pub use classify::{classify, UNSUPPORTED_URL_HINT};
pub use deezer::DeezerClient;
pub use error::{ProviderError, Result};
pub use fetcher::{AlbumFetcher, ProviderConfig, ProviderRegistry};
pub use itunes::{upscale_artwork, ItunesClient};
