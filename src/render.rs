//! Page rendering (HTML).

pub mod html;

pub use html::render_bookmarklet_page;

use crate::stats::BookmarkletStats;

/// Everything the page template interpolates.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    /// Link text and `<title>`; HTML-escaped on render.
    pub name: &'a str,
    /// Display name of the source script; HTML-escaped on render.
    pub script_label: &'a str,
    /// Full `javascript:` URI, already strict-percent-encoded.
    pub bookmarklet: &'a str,
    pub stats: BookmarkletStats,
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
