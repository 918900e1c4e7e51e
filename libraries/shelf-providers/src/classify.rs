//! Album URL classification.

use crate::error::{ProviderError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use shelf_core::{ParsedReference, Provider};

/// Message carried by [`ProviderError::UnsupportedUrl`].
pub const UNSUPPORTED_URL_HINT: &str =
    "Unsupported URL. Provide an Apple Music or Deezer album URL.";

lazy_static! {
    // https://music.apple.com/us/album/folklore/1524809890
    static ref APPLE_ALBUM_PATH: Regex =
        Regex::new(r"(?i)apple\.com/(?:[^/?#]+/)?album/[^/?#]+/(\d+)")
            .expect("apple album pattern");
    // https://itunes.apple.com/lookup?id=1524809890&entity=song
    static ref ID_QUERY_PARAM: Regex =
        Regex::new(r"[?&]id=(\d+)").expect("id query pattern");
    // https://www.deezer.com/en/album/302127
    static ref DEEZER_ALBUM_PATH: Regex =
        Regex::new(r"(?i)deezer\.com/(?:[a-z]{2}/)?album/(\d+)")
            .expect("deezer album pattern");
}

/// Identify the provider and album id of a pasted URL.
///
/// Apple patterns are tried before Deezer and the first match wins.
pub fn classify(url: &str) -> Result<ParsedReference> {
    let url = url.trim();

    let apple = APPLE_ALBUM_PATH
        .captures(url)
        .or_else(|| ID_QUERY_PARAM.captures(url));
    if let Some(caps) = apple {
        return Ok(ParsedReference::new(Provider::Itunes, &caps[1]));
    }

    if let Some(caps) = DEEZER_ALBUM_PATH.captures(url) {
        return Ok(ParsedReference::new(Provider::Deezer, &caps[1]));
    }

    Err(ProviderError::UnsupportedUrl(UNSUPPORTED_URL_HINT.to_string()))
}
