//! Admin album import page

use super::layout::{escape, page};
use crate::middleware::AdminSession;
use axum::response::Html;

const IMPORT_SCRIPT: &str = r#"
const form = document.getElementById("import-form");
const input = document.getElementById("import-url");
const button = document.getElementById("import-submit");
const status = document.getElementById("import-status");
const result = document.getElementById("import-result");

form.addEventListener("submit", async (event) => {
  event.preventDefault();
  button.disabled = true;
  status.className = "muted";
  status.textContent = "Importing...";
  result.textContent = "";
  try {
    const response = await fetch("/api/albums/import", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ url: input.value }),
    });
    const data = await response.json().catch(() => ({ error: "Unexpected response" }));
    if (!response.ok) {
      status.className = "error";
      status.textContent = data.error || "Import failed";
      return;
    }
    status.className = "muted";
    status.textContent = "Imported " + data.album.title + " by " + data.album.artist;
    result.textContent = JSON.stringify(data.album, null, 2);
    input.value = "";
  } catch (err) {
    status.className = "error";
    status.textContent = String(err);
  } finally {
    button.disabled = false;
  }
});
"#;

/// GET /secret
pub async fn import_page(session: AdminSession) -> Html<String> {
    Html(render(&session.email))
}

pub fn render(email: &str) -> String {
    let body = format!(
        "<h1>Import Album</h1>\n\
         <p class=\"muted\">Signed in as {}.</p>\n\
         <p>Paste an Apple Music or Deezer album URL. The album and its songs are \
         fetched from the provider and saved, re-importing refreshes an existing album.</p>\n\
         <form id=\"import-form\">\n\
         <input id=\"import-url\" type=\"url\" name=\"url\" \
         placeholder=\"https://music.apple.com/us/album/...\" required>\n\
         <button id=\"import-submit\" type=\"submit\">Import</button>\n</form>\n\
         <p id=\"import-status\" class=\"muted\" role=\"status\"></p>\n\
         <pre id=\"import-result\"></pre>\n\
         <form method=\"post\" action=\"/api/auth/signout\"><button type=\"submit\">Sign out</button></form>\n\
         <script>{IMPORT_SCRIPT}</script>",
        escape(email)
    );

    page("Import Album", &body)
}
