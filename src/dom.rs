//! DOM Helpers
//!
//! Thin wrappers over web-sys used by the controllers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget};

/// Remove the hidden class. Absent elements are a no-op.
pub fn show(el: Option<&Element>, hidden_class: &str) {
    if let Some(el) = el {
        let _ = el.class_list().remove_1(hidden_class);
    }
}

/// Add the hidden class. Absent elements are a no-op.
pub fn hide(el: Option<&Element>, hidden_class: &str) {
    if let Some(el) = el {
        let _ = el.class_list().add_1(hidden_class);
    }
}

pub fn set_visible(el: Option<&Element>, visible: bool, hidden_class: &str) {
    if visible {
        show(el, hidden_class);
    } else {
        hide(el, hidden_class);
    }
}

/// All elements matching `selector`, in document order.
/// An invalid selector yields an empty list.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        web_sys::console::warn_1(&format!("[DOM] Invalid selector: {}", selector).into());
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    // Listeners are never removed, so the closure must outlive this call
    cb.forget();
    Ok(())
}
