use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::EventTarget;

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("failed to listen for {event}: {reason}")]
    Register { event: &'static str, reason: String },
}

/// An event listener that lives exactly as long as this value.
/// Dropping it removes the listener from its target.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut() + 'static,
    ) -> Result<Self, ListenerError> {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err: JsValue| ListenerError::Register {
                event,
                reason: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
            })?;
        debug!("Listening for {}", event);

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Failed to remove {} listener", self.event);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::Event;

    use super::*;

    #[wasm_bindgen_test]
    fn dropping_the_listener_stops_delivery() {
        let target = EventTarget::new().unwrap();
        let hits = Rc::new(Cell::new(0u32));

        let listener = {
            let hits = hits.clone();
            EventListener::new(&target, "ping", move || hits.set(hits.get() + 1)).unwrap()
        };

        target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);

        drop(listener);
        target.dispatch_event(&Event::new("ping").unwrap()).unwrap();
        assert_eq!(hits.get(), 1);
    }
}
