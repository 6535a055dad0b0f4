//! About page.

pub fn about_body(site_name: &str) -> String {
    format!(
        r#"<h1>About</h1>
<p>{site_name} is a small starter website: server-rendered HTML, embedded static assets with cache-busting URLs, secure default headers and structured request logging.</p>"#
    )
}
