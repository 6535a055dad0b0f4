//! Error pages.

pub fn not_found_body() -> String {
    r#"<h1>Page not found</h1>
<p>The page you were looking for doesn't exist. <a href="/">Go back home</a>.</p>"#
        .to_string()
}

pub fn server_error_body() -> String {
    r#"<h1>Something went wrong</h1>
<p>The server hit a problem while handling your request. Please try again later.</p>"#
        .to_string()
}
