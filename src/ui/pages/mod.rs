//! Page bodies rendered inside the base layout.

pub mod about;
pub mod errors;
pub mod home;

pub use about::about_body;
pub use errors::{not_found_body, server_error_body};
pub use home::home_body;
