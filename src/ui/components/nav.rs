//! Navigation bar for the server-rendered pages.

use crate::nav::{find_active, NavLink, ACTIVE_CLASS};
use crate::ui::helpers::escape_html;

/// A link in the site navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink for NavEntry {
    fn href(&self) -> Option<String> {
        Some(self.href.to_string())
    }
}

/// Navigation links for the main menu, in display order.
pub const SITE_NAV: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        href: "/",
    },
    NavEntry {
        label: "About",
        href: "/about",
    },
];

/// Render `<nav>` with the link for `current_path` marked active.
///
/// Uses the same matching as the browser highlighter, so a page that loads
/// the wasm module ends up with the same single active link.
pub fn render_nav(entries: &[NavEntry], current_path: &str) -> String {
    let active = find_active(entries, current_path);

    let mut html = String::from("<nav>\n");
    for entry in entries {
        let class = match active {
            Some(a) if std::ptr::eq(a, entry) => format!(r#" class="{}""#, ACTIVE_CLASS),
            _ => String::new(),
        };
        html.push_str(&format!(
            "    <a{} href=\"{}\">{}</a>\n",
            class,
            escape_html(entry.href),
            escape_html(entry.label)
        ));
    }
    html.push_str("</nav>");
    html
}
