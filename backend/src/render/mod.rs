//! Server-side HTML rendering.
//!
//! Pages are assembled from plain string templates. Every value that comes
//! from the content store goes through [`escape`] (or [`escape_attr`] inside
//! attributes) before it reaches the output.
//!
//! - [`gallery`] - `GET /`
//! - [`mint`] - `GET /nft/{id}`

pub mod gallery;
pub mod mint;

use axum::http::StatusCode;

pub use gallery::gallery_page;
pub use mint::mint_page;

/// Document title on every page.
pub const SITE_TITLE: &str = "NFT DROP";

/// Escape text content.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value placed inside a double- or single-quoted attribute.
pub fn escape_attr(input: &str) -> String {
    escape(input).replace('"', "&quot;").replace('\'', "&#x27;")
}

/// Wrap a body in the shared document shell.
pub(crate) fn layout(body: &str, scripts: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="icon" href="/favicon.ico">
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
{body}
{scripts}
</body>
</html>
"#,
        title = SITE_TITLE,
        body = body,
        scripts = scripts,
    )
}

/// The site heading, optionally wrapped in a link home.
pub(crate) fn brand_heading(class: &str) -> String {
    format!(
        r#"<h1 class="{}">The <span class="font-extrabold underline decoration-pink-600/50">PAPAFAM</span> NFT Market Place</h1>"#,
        class
    )
}

/// Not-found page for unknown collection identifiers.
pub fn not_found_page() -> String {
    let body = r#"<div class="flex min-h-screen flex-col items-center justify-center">
<p class="text-9xl font-bold text-gray-300">404</p>
<h1 class="mt-4 text-2xl font-bold">This page could not be found.</h1>
<a href="/" class="mt-6 rounded-full bg-rose-400 px-5 py-3 text-white">Back to the gallery</a>
</div>"#;
    layout(body, "")
}

/// Generic error page. Details stay in the server log.
pub fn error_page(status: StatusCode) -> String {
    let body = format!(
        r#"<div class="flex min-h-screen flex-col items-center justify-center">
<p class="text-9xl font-bold text-gray-300">{}</p>
<h1 class="mt-4 text-2xl font-bold">whoops... Something went wrong!</h1>
</div>"#,
        status.as_u16()
    );
    layout(&body, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"a"b'c"#), "a&quot;b&#x27;c");
    }

    #[test]
    fn test_layout_sets_title_and_favicon() {
        let html = layout("<main></main>", "");
        assert!(html.contains("<title>NFT DROP</title>"));
        assert!(html.contains(r#"href="/favicon.ico""#));
        assert!(html.contains("<main></main>"));
    }

    #[test]
    fn test_error_pages() {
        assert!(not_found_page().contains("404"));
        assert!(error_page(StatusCode::BAD_GATEWAY).contains("502"));
    }
}
