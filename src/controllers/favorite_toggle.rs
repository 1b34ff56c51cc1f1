//! Favorite Toggle Controller
//!
//! Binds the bookmark buttons on auction pages to the favorites endpoint.
//! The icon only changes once the backend has confirmed the new state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::commands;
use crate::config::FavoritesConfig;
use crate::dom;
use crate::error::UiError;
use crate::models::BookmarkIcon;
use crate::tracker::RequestTracker;

/// Marks buttons that already carry a click handler
pub const BOUND_ATTRIBUTE: &str = "data-favorite-bound";

/// Bind every matching button present right now. Buttons bound by an
/// earlier call are skipped. Returns how many were newly bound.
pub fn bind_favorite_toggles(document: &Document, config: Rc<FavoritesConfig>) -> Result<usize, JsValue> {
    let mut bound = 0;
    for button in dom::query_all(document, &config.button_selector) {
        if button.has_attribute(BOUND_ATTRIBUTE) {
            continue;
        }
        bind_button(button, Rc::clone(&config))?;
        bound += 1;
    }
    Ok(bound)
}

fn bind_button(button: Element, config: Rc<FavoritesConfig>) -> Result<(), JsValue> {
    let tracker = Rc::new(RefCell::new(RequestTracker::new(config.overlap)));
    let target = button.clone();
    dom::on(&target, "click", move |_| {
        on_click(button.clone(), Rc::clone(&config), Rc::clone(&tracker));
    })?;
    // Only mark the button once the handler is attached
    target.set_attribute(BOUND_ATTRIBUTE, "")
}

fn on_click(button: Element, config: Rc<FavoritesConfig>, tracker: Rc<RefCell<RequestTracker>>) {
    let Some(auction_id) = button
        .get_attribute(&config.auction_attribute)
        .filter(|id| !id.is_empty())
    else {
        report_failure(&button, &config, "?", &UiError::MissingAuctionId);
        return;
    };

    let ticket = tracker.borrow_mut().begin();
    let Some(ticket) = ticket else {
        web_sys::console::log_1(
            &format!(
                "[Favorites] Click on auction {} ignored, {} toggle(s) in flight",
                auction_id,
                tracker.borrow().in_flight()
            )
            .into(),
        );
        return;
    };

    spawn_local(async move {
        let result = commands::toggle_favorite(&config, &auction_id).await;

        let current = {
            let mut tracker = tracker.borrow_mut();
            tracker.finish(ticket);
            tracker.is_current(ticket)
        };
        if !current {
            web_sys::console::log_1(&format!("[Favorites] Dropping stale response for auction {}", auction_id).into());
            return;
        }

        match result {
            Ok(resp) => {
                apply_icon(&button, &config, BookmarkIcon::from(resp));
                if let Some(class) = &config.error_class {
                    let _ = button.class_list().remove_1(class);
                }
            }
            Err(e) => report_failure(&button, &config, &auction_id, &e),
        }
    });
}

/// Switch the button's icon to exactly one of the two variants.
/// A button without an icon is left alone.
pub fn apply_icon(button: &Element, config: &FavoritesConfig, icon: BookmarkIcon) {
    let Ok(Some(el)) = button.query_selector(&config.icon_selector) else {
        return;
    };
    let (add, remove) = match icon {
        BookmarkIcon::Filled => (&config.filled_class, &config.outline_class),
        BookmarkIcon::Outline => (&config.outline_class, &config.filled_class),
    };
    let classes = el.class_list();
    let _ = classes.remove_1(remove);
    let _ = classes.add_1(add);
}

// Icon stays as it was before the click
fn report_failure(button: &Element, config: &FavoritesConfig, auction_id: &str, err: &UiError) {
    web_sys::console::error_1(&format!("[Favorites] Toggle failed for auction {}: {}", auction_id, err).into());
    if let Some(class) = &config.error_class {
        let _ = button.class_list().add_1(class);
    }
}
