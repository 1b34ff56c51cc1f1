//! Conditional Fields Controller
//!
//! Keeps the legal-type and role sections of the account forms in sync
//! with the select and checkboxes that own them.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use crate::config::FieldsConfig;
use crate::dom;
use crate::fields::{legal_type_visibility, role_visibility};
use crate::models::RoleSet;

/// Elements resolved once at bind time. Any of them may be missing.
pub struct ConditionalFields {
    hidden_class: String,
    legal_type_select: Option<HtmlSelectElement>,
    private_fields: Option<Element>,
    shopkeeper_fields: Option<Element>,
    role_checkboxes: Vec<HtmlInputElement>,
    buyer_fields: Option<Element>,
    seller_fields: Option<Element>,
}

impl ConditionalFields {
    pub fn resolve(document: &Document, config: &FieldsConfig) -> Self {
        let by_id = |id: &str| document.get_element_by_id(id);
        Self {
            hidden_class: config.hidden_class.clone(),
            legal_type_select: by_id(&config.legal_type_select_id)
                .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok()),
            private_fields: by_id(&config.private_fields_id),
            shopkeeper_fields: by_id(&config.shopkeeper_fields_id),
            role_checkboxes: dom::query_all(document, &config.role_checkbox_selector())
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
                .collect(),
            buyer_fields: by_id(&config.buyer_fields_id),
            seller_fields: by_id(&config.seller_fields_id),
        }
    }

    /// Show the section owned by the selected legal type, hide the other.
    /// No-op when the select is absent.
    pub fn apply_legal_type(&self) {
        let Some(select) = &self.legal_type_select else {
            return;
        };
        let visibility = legal_type_visibility(&select.value());
        dom::set_visible(self.private_fields.as_ref(), visibility.private, &self.hidden_class);
        dom::set_visible(self.shopkeeper_fields.as_ref(), visibility.shopkeeper, &self.hidden_class);
    }

    pub fn selected_roles(&self) -> RoleSet {
        let values: Vec<String> = self
            .role_checkboxes
            .iter()
            .filter(|cb| cb.checked())
            .map(|cb| cb.value())
            .collect();
        RoleSet::from_values(values.iter().map(String::as_str))
    }

    pub fn apply_roles(&self) {
        let visibility = role_visibility(&self.selected_roles());
        dom::set_visible(self.buyer_fields.as_ref(), visibility.buyer, &self.hidden_class);
        dom::set_visible(self.seller_fields.as_ref(), visibility.seller, &self.hidden_class);
    }
}

/// Attach `change` listeners and apply both rules once.
pub fn bind_conditional_fields(document: &Document, config: &FieldsConfig) -> Result<Rc<ConditionalFields>, JsValue> {
    let controller = Rc::new(ConditionalFields::resolve(document, config));

    if let Some(select) = &controller.legal_type_select {
        let ctl = Rc::clone(&controller);
        dom::on(select, "change", move |_| ctl.apply_legal_type())?;
        controller.apply_legal_type();
    } else {
        web_sys::console::log_1(&format!("[Fields] No #{} on this page", config.legal_type_select_id).into());
    }

    for checkbox in &controller.role_checkboxes {
        let ctl = Rc::clone(&controller);
        dom::on(checkbox, "change", move |_| ctl.apply_roles())?;
    }
    controller.apply_roles();

    Ok(controller)
}
