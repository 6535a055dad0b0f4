//! Small formatting helpers shared by the page templates.

use chrono::{DateTime, Utc};

/// Canonical URL for a page: always https, no `www.`, no query string.
pub fn canonical_url(host: &str, path: &str) -> String {
    let host = host.strip_prefix("www.").unwrap_or(host);
    format!("https://{}{}", host, path)
}

/// Human readable UTC timestamp, e.g. `02 Jan 2006 at 15:04`.
pub fn human_date(t: Option<DateTime<Utc>>) -> String {
    match t {
        Some(t) => t.format("%d %b %Y at %H:%M").to_string(),
        None => String::new(),
    }
}

/// Escape text for use in element content and quoted attribute values.
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
