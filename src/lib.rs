//! Graba Storefront Page Scripts
//!
//! Loaded on server-rendered pages:
//!
//! ```js
//! import init, { start } from "/static/pkg/graba_ui.js";
//! await init();
//! start();
//! ```

pub mod commands;
pub mod config;
pub mod controllers;
pub mod error;
pub mod fields;
pub mod models;
pub mod tracker;
mod dom;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use config::UiConfig;

/// Bind both controllers, waiting for `DOMContentLoaded` if the document
/// is still being parsed.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let document = document()?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::on(&document, "DOMContentLoaded", move |_| {
            if let Err(e) = bind_page(&doc) {
                web_sys::console::error_1(&e);
            }
        })
    } else {
        bind_page(&document)
    }
}

/// Bind favorite buttons inserted after `start()`. Already bound buttons
/// are skipped. Returns the number of newly bound buttons.
#[wasm_bindgen]
pub fn rebind_favorites() -> Result<usize, JsValue> {
    let document = document()?;
    let config = UiConfig::from_document(&document);
    controllers::bind_favorite_toggles(&document, Rc::new(config.favorites))
}

pub fn bind_page(document: &Document) -> Result<(), JsValue> {
    let config = UiConfig::from_document(document);
    controllers::bind_conditional_fields(document, &config.fields)?;
    let bound = controllers::bind_favorite_toggles(document, Rc::new(config.favorites))?;
    web_sys::console::log_1(&format!("[Init] Page bound, {} favorite buttons", bound).into());
    Ok(())
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}
