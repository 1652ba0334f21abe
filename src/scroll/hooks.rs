use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use super::activator::ScrollActivator;
use super::dom::{self, ElementTarget};
use super::listener::{EventListener, ListenerError};
use crate::config::ScrollConfig;

type SharedActivator = Rc<RefCell<ScrollActivator<ElementTarget>>>;

/// Watches the component's reveal blocks and returns whether the
/// scroll-to-top button should show. Must be used by the component that
/// renders the blocks, since they are collected once on mount.
#[hook]
pub fn use_scroll_activator(config: ScrollConfig) -> bool {
    let scroll_top_visible = use_state(|| false);

    {
        let setter = scroll_top_visible.setter();
        use_effect_with_deps(
            move |config| {
                let listeners = match attach(*config, move |visible| setter.set(visible)) {
                    Ok(listeners) => listeners,
                    Err(err) => {
                        warn!("Scroll effects disabled: {}", err);
                        Vec::new()
                    }
                };
                move || drop(listeners)
            },
            config,
        );
    }

    *scroll_top_visible
}

/// Registers every `.scroll-animate` block in the document, runs the
/// first check right away and keeps checking on scroll and resize for as
/// long as the returned listeners live. `on_visibility` only hears about
/// changes.
fn attach(
    config: ScrollConfig,
    on_visibility: impl Fn(bool) + 'static,
) -> Result<Vec<EventListener>, ListenerError> {
    let window = web_sys::window().ok_or(ListenerError::NoWindow)?;
    let document = window.document().ok_or(ListenerError::NoDocument)?;

    let mut activator = ScrollActivator::new(config);
    for target in dom::reveal_targets(&document) {
        activator.register(target);
    }
    info!("Watching {} reveal block(s)", activator.pending());

    let activator: SharedActivator = Rc::new(RefCell::new(activator));

    let on_scroll = {
        let activator = activator.clone();
        let window = window.clone();
        move || {
            let update = activator
                .borrow_mut()
                .on_scroll(dom::scroll_offset(&window), dom::viewport_height(&window));
            if update.visibility_changed {
                on_visibility(update.scroll_top_visible);
            }
        }
    };

    // Content already in view at load time shows up without scrolling.
    on_scroll();

    let on_resize = {
        let activator = activator.clone();
        let window = window.clone();
        move || {
            activator
                .borrow_mut()
                .reveal_check(dom::viewport_height(&window));
        }
    };

    Ok(vec![
        EventListener::new(&window, "scroll", on_scroll)?,
        EventListener::new(&window, "resize", on_resize)?,
    ])
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::config;

    #[wasm_bindgen_test]
    fn blocks_in_view_are_revealed_on_attach() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();

        let blocks: Vec<web_sys::Element> = (0..2)
            .map(|_| {
                let block = document.create_element("div").unwrap();
                block.set_class_name(config::REVEAL_CLASS);
                block.set_text_content(Some("block"));
                body.prepend_with_node_1(&block).unwrap();
                block
            })
            .collect();

        let calls = Rc::new(Cell::new(0));
        let listeners = {
            let calls = calls.clone();
            attach(ScrollConfig::default(), move |_| calls.set(calls.get() + 1)).unwrap()
        };

        for block in &blocks {
            assert!(block.class_list().contains(config::REVEALED_CLASS));
        }
        // Not scrolled, so the button stays hidden and nobody is told.
        assert_eq!(calls.get(), 0);

        drop(listeners);
        for block in blocks {
            block.remove();
        }
    }
}
