//! Active navigation link highlighting.
//!
//! The navbar marks the link that points at the page being displayed. Matching
//! is exact string equality between a link's `href` and the current path: no
//! normalization, no trailing-slash handling, no query stripping. Only the
//! first matching link in document order is marked.
//!
//! The core takes the links and the path as parameters so it runs the same on
//! the server (see `ui::components::nav`) and in the browser (see `nav::dom`).

#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Class added to the active link.
pub const ACTIVE_CLASS: &str = "active";

/// Selector for the anchors the browser build inspects, in document order.
pub const NAV_LINK_SELECTOR: &str = "nav a";

/// Read side of a navigation anchor.
pub trait NavLink {
    /// The raw `href` attribute, `None` when the anchor has none.
    fn href(&self) -> Option<String>;
}

/// Write side of a navigation anchor.
///
/// Takes `&self` because DOM elements are shared handles into the page.
pub trait MarkActive {
    fn add_class(&self, class: &str);
}

impl<T: NavLink + ?Sized> NavLink for &T {
    fn href(&self) -> Option<String> {
        (**self).href()
    }
}

impl<T: MarkActive + ?Sized> MarkActive for &T {
    fn add_class(&self, class: &str) {
        (**self).add_class(class)
    }
}

/// Returns the first link whose `href` equals `current_path`.
pub fn find_active<I>(links: I, current_path: &str) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: NavLink,
{
    links
        .into_iter()
        .find(|link| link.href().as_deref() == Some(current_path))
}

/// Adds [`ACTIVE_CLASS`] to the first link matching `current_path`.
///
/// Links after the first match are never inspected. Returns the marked link,
/// or `None` when nothing matched (which is not an error).
pub fn highlight_active_link<I>(links: I, current_path: &str) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: NavLink + MarkActive,
{
    let active = find_active(links, current_path)?;
    active.add_class(ACTIVE_CLASS);
    tracing::debug!(path = current_path, "marked active nav link");
    Some(active)
}
