//! Shared pieces of the server-rendered pages.

pub mod layout;
pub mod nav;

pub use layout::render_layout;
pub use nav::{render_nav, NavEntry, SITE_NAV};
