//! Route table for the site.

use axum::{extract::State, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::compression::CompressionLayer;

use super::middleware::{common_headers, log_request, recover_panic};
use super::AppState;
use crate::ui::helpers::human_date;
use crate::{assets, ui};

/// All routes for the site, with middleware and state applied.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(ui::home_page))
        .route("/about", get(ui::about_page))
        .route("/static/{*path}", get(assets::static_handler))
        .route("/debug/vars", get(debug_vars_handler))
        .fallback(ui::not_found_page);

    with_middleware(routes, state)
}

/// Wrap `routes` in the site middleware stack.
///
/// Outermost first: common headers, panic recovery, request logging, compression.
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(middleware::from_fn_with_state(state.clone(), recover_panic))
        .layer(middleware::from_fn(common_headers))
        .with_state(state)
}

/// GET /debug/vars - build and runtime information
async fn debug_vars_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "version": crate::version(),
        "git_sha": crate::git_sha(),
        "env": state.config.env.as_str(),
        "started": human_date(Some(state.started_at)),
    }))
}
