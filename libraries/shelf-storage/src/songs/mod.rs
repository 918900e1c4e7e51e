use shelf_core::{error::Result, types::*};
use sqlx::{Row, SqlitePool};

pub async fn get_by_album(pool: &SqlitePool, album_id: &AlbumId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT id, title, link, album_id
         FROM songs
         WHERE album_id = ?
         ORDER BY title COLLATE NOCASE, title",
    )
    .bind(album_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Song {
            id: row.get("id"),
            title: row.get("title"),
            link: row.get("link"),
            album_id: row.get("album_id"),
        })
        .collect())
}

/// Upsert every song of an album inside one transaction.
///
/// Existing songs keep their identity and title; only a newly fetched link
/// replaces the stored one. Any failing row rolls back the whole batch.
pub async fn upsert_batch(pool: &SqlitePool, album_id: &AlbumId, songs: &[UpsertSong]) -> Result<()> {
    let mut tx = pool.begin().await?;

    for song in songs {
        sqlx::query(
            r#"
            INSERT INTO songs (id, title, link, album_id)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (title, album_id) DO UPDATE SET
                link = COALESCE(excluded.link, songs.link)
            "#,
        )
        .bind(SongId::generate())
        .bind(&song.title)
        .bind(&song.link)
        .bind(album_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}
