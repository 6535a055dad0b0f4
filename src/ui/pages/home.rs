//! Home page.

pub fn home_body(site_name: &str) -> String {
    format!(
        r#"<h1>Welcome to {site_name}</h1>
<p>This site is served by a single Rust binary. Pages are rendered on the server and the navbar marks the page you are on.</p>"#
    )
}
