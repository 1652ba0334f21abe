use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use super::activator::RevealTarget;
use crate::config;

/// An element carrying the reveal class.
pub struct ElementTarget(Element);

impl RevealTarget for ElementTarget {
    fn top(&self) -> Option<f64> {
        Some(self.0.get_bounding_client_rect().top())
    }

    fn reveal(&self) {
        if self.0.class_list().add_1(config::REVEALED_CLASS).is_err() {
            warn!("Could not mark block as revealed");
        }
    }
}

/// Every element currently in the document with the reveal class.
pub fn reveal_targets(document: &Document) -> Vec<ElementTarget> {
    let selector = format!(".{}", config::REVEAL_CLASS);
    let nodes = match document.query_selector_all(&selector) {
        Ok(nodes) => nodes,
        Err(_) => {
            warn!("Invalid reveal selector {}", selector);
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(ElementTarget)
        .collect()
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Fire-and-forget smooth scroll.
pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Smooth-scrolls so the element with `id` sits just below the sticky nav.
pub fn scroll_to_section(id: &str, nav_height: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let element = window
        .document()
        .and_then(|document| document.get_element_by_id(id));

    match element {
        Some(element) => {
            let top = element.get_bounding_client_rect().top() + scroll_offset(&window) - nav_height;
            smooth_scroll_to(top.max(0.0));
        }
        None => warn!("No section with id {}", id),
    }
}
