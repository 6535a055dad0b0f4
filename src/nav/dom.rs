//! Browser binding for the navbar highlighter.
//!
//! Built with `wasm-pack build --target web --no-default-features --out-dir static/pkg`
//! and loaded by `static/js/main.js`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use super::{highlight_active_link, MarkActive, NavLink, NAV_LINK_SELECTOR};

impl NavLink for Element {
    fn href(&self) -> Option<String> {
        // The attribute as written, not the resolved absolute `.href` property
        self.get_attribute("href")
    }
}

impl MarkActive for Element {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            tracing::warn!("Failed to add class {}: {:?}", class, e);
        }
    }
}

/// Anchors inside the navbar, in document order.
pub fn nav_links(document: &Document) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(NAV_LINK_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// The path of the displayed document, read once.
pub fn current_path(window: &Window) -> Option<String> {
    window.location().pathname().ok()
}

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(path) = current_path(&window) else {
        return;
    };
    highlight_active_link(nav_links(&document), &path);
}
