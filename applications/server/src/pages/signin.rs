//! Session token sign-in page

use super::layout::{escape, page};

/// Render the sign-in form, optionally with an error message
pub fn render(error: Option<&str>) -> String {
    let error = error
        .map(|message| format!("<p class=\"error\">{}</p>\n", escape(message)))
        .unwrap_or_default();

    let body = format!(
        "<h1>Sign in</h1>\n{error}\
         <p class=\"muted\">Paste a session token issued with \
         <code>shelf-server issue-session --email &lt;address&gt;</code>.</p>\n\
         <form method=\"post\" action=\"/api/auth/signin\">\n\
         <input type=\"text\" name=\"token\" placeholder=\"Session token\" autocomplete=\"off\" required>\n\
         <button type=\"submit\">Sign in</button>\n</form>"
    );

    page("Sign in", &body)
}
