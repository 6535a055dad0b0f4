//! Embedded static assets for single-binary distribution.
//!
//! Everything under `static/` is compiled into the binary and served from
//! `/static/`. Asset URLs carry a content hash so they can be cached forever.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::error::{Result, SiteError};
use crate::server::{AppState, RequestInfo};
use crate::ui;

/// URL prefix the embedded folder is mounted under
pub const STATIC_PREFIX: &str = "/static/";

const CACHE_CONTROL: &str = "public, max-age=31536000";

#[derive(RustEmbed)]
#[folder = "static/"]
pub struct Assets;

/// Append `?v=<md5>` of the asset's contents to `path`.
///
/// `path` is the public URL, e.g. `/static/css/main.css`. When the file
/// changes so does the hash, which bypasses any cached copy.
pub fn hash_asset_path(path: &str) -> Result<String> {
    if path.trim().is_empty() {
        return Err(SiteError::EmptyAssetPath);
    }
    if !path.starts_with('/') {
        return Err(SiteError::RelativeAssetPath(path.to_string()));
    }

    let file = path
        .strip_prefix(STATIC_PREFIX)
        .and_then(Assets::get)
        .ok_or_else(|| SiteError::AssetNotFound(path.to_string()))?;

    Ok(format!("{}?v={:x}", path, md5::compute(&file.data)))
}

/// GET /static/{*path} - embedded file, or the 404 page
pub async fn static_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    req: RequestInfo,
) -> Response {
    match Assets::get(&path) {
        Some(file) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.as_ref().to_string()),
                    (header::CACHE_CONTROL, CACHE_CONTROL.to_string()),
                ],
                file.data.into_owned(),
            )
                .into_response()
        }
        None => {
            tracing::debug!("Static asset not found: {}", path);
            ui::not_found_response(&state, &req)
        }
    }
}
