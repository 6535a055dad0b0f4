//! Starter Site
//!
//! A small website served from a single binary.
//!
//! This library provides:
//! - Active navbar link highlighting, shared by the server and the browser build
//! - Server-rendered HTML pages with OpenGraph metadata
//! - Embedded static assets with cache-busting URLs
//! - Secure default headers, request logging and panic recovery
//! - Layered configuration from file and environment

pub mod nav;

#[cfg(feature = "server")]
pub mod assets;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub mod ui;

/// Version injected at build time (SITE_VERSION, defaults to the crate version)
pub fn version() -> &'static str {
    env!("SITE_VERSION")
}

/// Short git SHA injected at build time ("N/A" when unavailable)
pub fn git_sha() -> &'static str {
    env!("SITE_GIT_SHA")
}
