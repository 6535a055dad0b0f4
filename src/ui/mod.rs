//! Web UI handlers - server-rendered HTML pages
//!
//! Every page shares the base layout in `components::layout`. The navbar is
//! rendered with the active link already marked; the browser build of
//! `crate::nav` applies the same rule on the client.

pub mod components;
pub mod helpers;
pub mod pages;

use std::backtrace::Backtrace;
use std::fmt::Display;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, Utc};

use crate::error::Result;
use crate::server::{AppState, RequestInfo};
use components::render_layout;
use helpers::{canonical_url, escape_html};

/// Open Graph image used when a page doesn't set its own
pub const DEFAULT_OG_IMAGE: &str = "/static/images/default_og_image.svg";

/// Dynamic data passed into the base layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData {
    pub canonical_url: String,
    pub current_path: String,
    pub current_year: i32,
    pub description: String,
    pub image_url: String,
    pub page_type: String,
    pub site_name: String,
    pub title: String,
}

impl PageData {
    pub fn new(state: &AppState, req: &RequestInfo) -> Self {
        Self {
            canonical_url: canonical_url(req.host(), req.uri.path()),
            current_path: req.uri.path().to_string(),
            current_year: Utc::now().year(),
            description: String::new(),
            image_url: DEFAULT_OG_IMAGE.to_string(),
            page_type: "website".to_string(),
            site_name: state.config.name.clone(),
            title: String::new(),
        }
    }
}

/// The pages this site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    NotFound,
    ServerError,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::NotFound => "Not Found",
            Page::ServerError => "Server Error",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => "Homepage of a website",
            Page::About => "About website",
            Page::NotFound => "404 page",
            Page::ServerError => "Server error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Page::Home | Page::About => StatusCode::OK,
            Page::NotFound => StatusCode::NOT_FOUND,
            Page::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self, site_name: &str) -> String {
        let site_name = escape_html(site_name);
        match self {
            Page::Home => pages::home_body(&site_name),
            Page::About => pages::about_body(&site_name),
            Page::NotFound => pages::not_found_body(),
            Page::ServerError => pages::server_error_body(),
        }
    }
}

/// Render a full HTML document for `page`.
pub fn render_page(page: Page, state: &AppState, req: &RequestInfo) -> Result<String> {
    let data = PageData {
        title: page.title().to_string(),
        description: page.description().to_string(),
        ..PageData::new(state, req)
    };
    render_layout(&data, &page.body(&data.site_name))
}

/// Render `page` with its status code, falling back to the 500 page.
pub fn page_response(page: Page, state: &AppState, req: &RequestInfo) -> Response {
    match render_page(page, state, req) {
        Ok(html) => (page.status(), Html(html)).into_response(),
        Err(e) => server_error_response(state, req, &e),
    }
}

/// Log `err` and answer with the 500 page, or the raw error in debug mode.
pub fn server_error_response(state: &AppState, req: &RequestInfo, err: &dyn Display) -> Response {
    let trace = Backtrace::force_capture();
    tracing::error!(
        method = %req.method,
        uri = %req.uri,
        trace = %trace,
        "{}",
        err
    );

    if state.config.debug {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n\n{}", err, trace),
        )
            .into_response();
    }

    match render_page(Page::ServerError, state, req) {
        Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render server error page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// 404 page for `req`
pub fn not_found_response(state: &AppState, req: &RequestInfo) -> Response {
    page_response(Page::NotFound, state, req)
}

/// GET / - Home page
pub async fn home_page(State(state): State<AppState>, req: RequestInfo) -> Response {
    page_response(Page::Home, &state, &req)
}

/// GET /about - About page
pub async fn about_page(State(state): State<AppState>, req: RequestInfo) -> Response {
    page_response(Page::About, &state, &req)
}

/// Fallback for unknown routes
pub async fn not_found_page(State(state): State<AppState>, req: RequestInfo) -> Response {
    not_found_response(&state, &req)
}
