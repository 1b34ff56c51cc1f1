//! Page Configuration
//!
//! Selectors, class names and endpoint used by the controllers. Defaults
//! match the storefront templates; a page may override any of them with
//! `<script id="graba-ui-config" type="application/json">{...}</script>`.

use serde::Deserialize;
use web_sys::Document;

use crate::tracker::OverlapPolicy;

pub const CONFIG_ELEMENT_ID: &str = "graba-ui-config";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub fields: FieldsConfig,
    pub favorites: FavoritesConfig,
}

/// Conditional form sections
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    pub legal_type_select_id: String,
    pub private_fields_id: String,
    pub shopkeeper_fields_id: String,
    /// `name` shared by the role checkboxes
    pub role_checkbox_name: String,
    pub buyer_fields_id: String,
    pub seller_fields_id: String,
    pub hidden_class: String,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            legal_type_select_id: "id_legal_type".to_string(),
            private_fields_id: "private-fields".to_string(),
            shopkeeper_fields_id: "shopkeeper-fields".to_string(),
            role_checkbox_name: "role_types".to_string(),
            buyer_fields_id: "buyer-fields".to_string(),
            seller_fields_id: "seller-fields".to_string(),
            hidden_class: "d-none".to_string(),
        }
    }
}

impl FieldsConfig {
    pub fn role_checkbox_selector(&self) -> String {
        format!("input[name=\"{}\"]", self.role_checkbox_name)
    }
}

/// Favorite toggle buttons and their endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    pub button_selector: String,
    /// `data-*` attribute carrying the auction id
    pub auction_attribute: String,
    pub icon_selector: String,
    pub filled_class: String,
    pub outline_class: String,
    /// Path prefix; the request goes to `{endpoint_base}{id}/toggle/`
    pub endpoint_base: String,
    pub overlap: OverlapPolicy,
    /// Treat non-2xx responses as failures instead of decoding them
    pub check_status: bool,
    /// Class put on the button while its last toggle failed
    pub error_class: Option<String>,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            button_selector: ".favorite-toggle".to_string(),
            auction_attribute: "data-auction".to_string(),
            icon_selector: "i".to_string(),
            filled_class: "bi-bookmark-fill".to_string(),
            outline_class: "bi-bookmark".to_string(),
            endpoint_base: "/favorites/".to_string(),
            overlap: OverlapPolicy::Concurrent,
            check_status: false,
            error_class: None,
        }
    }
}

impl UiConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load overrides from the page, falling back to defaults.
    pub fn from_document(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => match config.invalid_class_key() {
                Some(key) => {
                    web_sys::console::warn_1(&format!("[Config] Ignoring page config: {} is not a usable class name", key).into());
                    Self::default()
                }
                None => config,
            },
            Err(e) => {
                web_sys::console::warn_1(&format!("[Config] Ignoring invalid page config: {}", e).into());
                Self::default()
            }
        }
    }

    /// First class-name setting that `classList` would reject (empty or
    /// containing whitespace).
    pub fn invalid_class_key(&self) -> Option<&'static str> {
        let classes = [
            ("fields.hidden_class", Some(&self.fields.hidden_class)),
            ("favorites.filled_class", Some(&self.favorites.filled_class)),
            ("favorites.outline_class", Some(&self.favorites.outline_class)),
            ("favorites.error_class", self.favorites.error_class.as_ref()),
        ];
        classes
            .into_iter()
            .find(|(_, class)| matches!(class, Some(c) if c.is_empty() || c.chars().any(char::is_whitespace)))
            .map(|(key, _)| key)
    }
}
