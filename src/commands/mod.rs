//! Backend Endpoint Wrappers
//!
//! Fetch-API bindings to the storefront endpoints used by the page scripts.

mod favorites;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::error::UiError;

pub use favorites::*;

/// Same-origin GET returning the decoded JSON body as a `JsValue`.
/// Any resolvable response is decoded unless `check_status` is set.
async fn get_json(url: &str, check_status: bool) -> Result<JsValue, UiError> {
    let window = web_sys::window().ok_or_else(|| UiError::Js("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_credentials(RequestCredentials::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if check_status && !resp.ok() {
        return Err(UiError::Status(resp.status()));
    }

    Ok(JsFuture::from(resp.json()?).await?)
}
