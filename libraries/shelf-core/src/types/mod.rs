mod album;
mod ids;
mod import;
mod song;

pub use album::{Album, AlbumSummary, AlbumWithSongs, UpsertAlbum};
pub use ids::{AlbumId, SongId};
pub use import::{NormalizedAlbum, NormalizedSong, ParsedReference, Provider};
pub use song::{Song, UpsertSong};
