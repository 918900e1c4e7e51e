//! Album table page

use super::layout::{escape, page};
use crate::{api::albums::AlbumQuery, error::Result, state::AppState};
use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::DateTime;
use shelf_core::{AlbumSummary, StorageContext};
use std::fmt::Write;

/// GET /
pub async fn index(
    State(app_state): State<AppState>,
    Query(query): Query<AlbumQuery>,
) -> Result<Html<String>> {
    let albums = app_state.db.list_albums(query.limit).await?;
    let body = format!("<h1>Albums</h1>\n{}", render_table(&albums));
    Ok(Html(page("Albums", &body)))
}

/// Render the albums table, or an empty-state message
pub fn render_table(albums: &[AlbumSummary]) -> String {
    if albums.is_empty() {
        return "<p class=\"muted\">No albums yet.</p>".to_string();
    }

    let mut html = String::new();
    let noun = if albums.len() == 1 { "album" } else { "albums" };
    let _ = writeln!(html, "<p class=\"muted\">{} {noun}</p>", albums.len());
    html.push_str(
        "<table>\n<thead><tr><th></th><th>Title</th><th>Artist</th><th>Songs</th>\
         <th>Link</th><th>Added</th></tr></thead>\n<tbody>\n",
    );

    for summary in albums {
        let album = &summary.album;
        let cover = match album.image_url.as_deref() {
            Some(url) => format!(
                "<img class=\"cover\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                escape(url),
                escape(&album.title)
            ),
            None => "<span class=\"cover-placeholder\"></span>".to_string(),
        };
        let link = match album.link.as_deref() {
            Some(url) => format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Open</a>",
                escape(url)
            ),
            None => String::new(),
        };

        let _ = writeln!(
            html,
            "<tr><td>{cover}</td><td>{}</td><td>{}</td><td>{}</td><td>{link}</td><td>{}</td></tr>",
            escape(&album.title),
            escape(&album.artist),
            summary.song_count,
            escape(&format_date(&album.created_at)),
        );
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Format a stored timestamp like `Jan 05, 2025`
///
/// Unparseable values are shown as stored.
pub fn format_date(created_at: &str) -> String {
    DateTime::parse_from_rfc3339(created_at)
        .map(|date| date.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}
