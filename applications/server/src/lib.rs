//! Shelf Server Library
//!
//! Album import admin service: an HTTP API that imports Apple Music and
//! Deezer albums, plus server-rendered pages listing them.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use services::SessionService;
pub use state::AppState;
