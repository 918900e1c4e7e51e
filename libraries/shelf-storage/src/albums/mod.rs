use shelf_core::{error::Result, types::*};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const ALBUM_COLUMNS: &str = "a.id, a.title, a.artist, a.image_url, a.link, a.created_at";

fn album_from_row(row: &SqliteRow) -> Album {
    Album {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        image_url: row.get("image_url"),
        link: row.get("link"),
        created_at: row.get("created_at"),
    }
}

pub async fn get_by_id(pool: &SqlitePool, id: &AlbumId) -> Result<Option<Album>> {
    let row = sqlx::query(&format!("SELECT {ALBUM_COLUMNS} FROM albums a WHERE a.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(album_from_row))
}

pub async fn find_by_link(pool: &SqlitePool, link: &str) -> Result<Option<Album>> {
    let row = sqlx::query(&format!("SELECT {ALBUM_COLUMNS} FROM albums a WHERE a.link = ?"))
        .bind(link)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(album_from_row))
}

pub async fn find_by_title_artist(
    pool: &SqlitePool,
    title: &str,
    artist: &str,
) -> Result<Option<Album>> {
    let row = sqlx::query(&format!(
        "SELECT {ALBUM_COLUMNS} FROM albums a WHERE a.title = ? AND a.artist = ?"
    ))
    .bind(title)
    .bind(artist)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(album_from_row))
}

/// Insert or refresh an album in one statement.
///
/// The `link` conflict target wins over (`title`, `artist`): re-importing the
/// same URL refreshes the metadata of the row it created, while a new URL for
/// an already known album moves that row's link. A concurrent writer creating
/// the same row between our read and write lands on the conflict branch
/// instead of failing.
pub async fn upsert(pool: &SqlitePool, album: UpsertAlbum) -> Result<Album> {
    let id: AlbumId = sqlx::query_scalar(
        r#"
        INSERT INTO albums (id, title, artist, image_url, link)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT (link) DO UPDATE SET
            title = excluded.title,
            artist = excluded.artist,
            image_url = COALESCE(excluded.image_url, albums.image_url)
        ON CONFLICT (title, artist) DO UPDATE SET
            link = excluded.link,
            image_url = COALESCE(excluded.image_url, albums.image_url)
        RETURNING id
        "#,
    )
    .bind(AlbumId::generate())
    .bind(&album.title)
    .bind(&album.artist)
    .bind(&album.image_url)
    .bind(&album.link)
    .fetch_one(pool)
    .await?;

    get_by_id(pool, &id).await?.ok_or_else(|| {
        shelf_core::ShelfError::storage("Failed to retrieve upserted album")
    })
}

/// Albums newest first with song counts; `None` lists everything.
pub async fn list_with_song_counts(
    pool: &SqlitePool,
    limit: Option<u32>,
) -> Result<Vec<AlbumSummary>> {
    // SQLite treats a negative LIMIT as unbounded
    let limit = limit.map_or(-1, i64::from);

    let rows = sqlx::query(&format!(
        "SELECT {ALBUM_COLUMNS}, COUNT(s.id) AS song_count
         FROM albums a
         LEFT JOIN songs s ON s.album_id = a.id
         GROUP BY a.id
         ORDER BY a.created_at DESC, a.rowid DESC
         LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| AlbumSummary {
            album: album_from_row(row),
            song_count: row.get("song_count"),
        })
        .collect())
}
