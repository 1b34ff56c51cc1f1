//! Field Visibility Rules
//!
//! Pure functions deciding which optional form sections are shown.

use crate::models::{LegalType, Role, RoleSet};

/// Visibility of the legal-type field groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegalTypeVisibility {
    pub private: bool,
    pub shopkeeper: bool,
}

/// Visibility of the role field groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleVisibility {
    pub buyer: bool,
    pub seller: bool,
}

/// At most one group is visible; unrecognized values hide both.
pub fn legal_type_visibility(value: &str) -> LegalTypeVisibility {
    match LegalType::from_tag(value) {
        Some(LegalType::Private) => LegalTypeVisibility { private: true, shopkeeper: false },
        Some(LegalType::Shopkeeper) => LegalTypeVisibility { private: false, shopkeeper: true },
        None => LegalTypeVisibility::default(),
    }
}

/// Each role group follows its own tag, independently of the other.
pub fn role_visibility(selected: &RoleSet) -> RoleVisibility {
    RoleVisibility {
        buyer: selected.contains(Role::Buyer),
        seller: selected.contains(Role::Seller),
    }
}
