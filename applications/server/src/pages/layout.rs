//! Shared page chrome and HTML escaping

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 960px; padding: 0 1rem; color: #1f2328; }
nav { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #d0d7de; padding: 0.5rem; text-align: left; vertical-align: middle; }
img.cover, .cover-placeholder { width: 48px; height: 48px; border-radius: 4px; object-fit: cover; }
.cover-placeholder { display: inline-block; background: #d0d7de; }
.muted { color: #656d76; }
.error { color: #cf222e; }
form { display: flex; gap: 0.5rem; margin: 1rem 0; }
input[type=text], input[type=url] { flex: 1; padding: 0.5rem; }
pre { background: #f6f8fa; padding: 1rem; overflow-x: auto; }
";

/// Wrap a page body in the document skeleton
///
/// `title` is escaped, `body` must already be safe HTML.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | Shelf</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Albums</a><a href=\"/secret\">Import</a></nav>\n\
         <main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}
