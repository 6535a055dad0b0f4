//! Base HTML document shared by every page.

use crate::assets::hash_asset_path;
use crate::error::Result;
use crate::ui::components::nav::{render_nav, SITE_NAV};
use crate::ui::helpers::escape_html;
use crate::ui::PageData;

const STYLESHEET: &str = "/static/css/main.css";
const SCRIPT: &str = "/static/js/main.js";

/// Wrap `body` in the base layout: head metadata, navbar, footer.
pub fn render_layout(data: &PageData, body: &str) -> Result<String> {
    let stylesheet = hash_asset_path(STYLESHEET)?;
    let script = hash_asset_path(SCRIPT)?;
    let nav = render_nav(SITE_NAV, &data.current_path);

    let title = escape_html(&data.title);
    let site_name = escape_html(&data.site_name);
    let description = escape_html(&data.description);
    let canonical = escape_html(&data.canonical_url);
    let image = escape_html(&data.image_url);
    let page_type = escape_html(&data.page_type);
    let year = data.current_year;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - {site_name}</title>
    <meta name="description" content="{description}">
    <link rel="canonical" href="{canonical}">
    <meta property="og:site_name" content="{site_name}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:type" content="{page_type}">
    <meta property="og:url" content="{canonical}">
    <meta property="og:image" content="{image}">
    <link rel="stylesheet" href="{stylesheet}">
    <script type="module" src="{script}"></script>
</head>
<body>
{nav}
<main>
{body}
</main>
<footer>&copy; {year} {site_name}</footer>
</body>
</html>
"#
    ))
}
