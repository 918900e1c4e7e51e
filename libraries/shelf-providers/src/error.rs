//! Error types for provider lookups.

use shelf_core::Provider;
use thiserror::Error;

/// Errors raised while classifying a URL or fetching album metadata.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The pasted URL matches no supported provider
    #[error("{0}")]
    UnsupportedUrl(String),

    /// The provider answered with a non-success status
    #[error("{provider} lookup failed: {status}")]
    UpstreamFetch { provider: Provider, status: u16 },

    /// The provider answered but the payload holds no album
    #[error("Album not found in {provider} response.")]
    AlbumNotFound { provider: Provider },

    /// The album payload lacks data we cannot import without
    #[error("Invalid {provider} album: {reason}")]
    InvalidAlbum { provider: Provider, reason: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to parse the provider response
    #[error("Failed to parse {provider} response: {message}")]
    Parse { provider: Provider, message: String },

    /// Invalid provider base URL in configuration
    #[error("Invalid provider URL: {0}")]
    InvalidBaseUrl(String),
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
