//! Transient values passed through the import pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// External metadata source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Provider {
    Itunes,
    Deezer,
}

impl Provider {
    /// Human-readable provider name
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::Itunes => "iTunes",
            Provider::Deezer => "Deezer",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A recognized album URL: provider plus the provider's album identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "UPPERCASE")]
pub enum ParsedReference {
    Itunes {
        #[serde(rename = "albumId")]
        album_id: String,
    },
    Deezer {
        #[serde(rename = "albumId")]
        album_id: String,
    },
}

impl ParsedReference {
    pub fn new(provider: Provider, album_id: impl Into<String>) -> Self {
        let album_id = album_id.into();
        match provider {
            Provider::Itunes => Self::Itunes { album_id },
            Provider::Deezer => Self::Deezer { album_id },
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            Self::Itunes { .. } => Provider::Itunes,
            Self::Deezer { .. } => Provider::Deezer,
        }
    }

    pub fn album_id(&self) -> &str {
        match self {
            Self::Itunes { album_id } | Self::Deezer { album_id } => album_id,
        }
    }
}

/// Provider-agnostic album metadata produced by a fetcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAlbum {
    pub title: String,
    pub artist: String,
    pub image_url: Option<String>,
    /// Songs in provider order
    pub songs: Vec<NormalizedSong>,
}

/// A single track of a `NormalizedAlbum`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSong {
    pub title: String,
    pub link: Option<String>,
}

impl NormalizedSong {
    pub fn new(title: impl Into<String>, link: Option<String>) -> Self {
        Self {
            title: title.into(),
            link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_reference_serializes_as_tagged_union() {
        let reference = ParsedReference::new(Provider::Itunes, "1524809890");
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "provider": "ITUNES", "albumId": "1524809890" })
        );
    }

    #[test]
    fn parsed_reference_accessors() {
        let reference = ParsedReference::new(Provider::Deezer, "302127");
        assert_eq!(reference.provider(), Provider::Deezer);
        assert_eq!(reference.album_id(), "302127");
    }

    #[test]
    fn provider_display_names() {
        assert_eq!(Provider::Itunes.to_string(), "iTunes");
        assert_eq!(Provider::Deezer.to_string(), "Deezer");
    }
}
