//! Frontend Models
//!
//! Value types mirrored from the storefront forms and the favorites endpoint.

use serde::Deserialize;

/// Account legal type (`legal_type` select on the registration form)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalType {
    Private,
    Shopkeeper,
}

impl LegalType {
    /// Parse a select value. Empty or unknown values yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "PRIVATE" => Some(Self::Private),
            "SHOPKEEPER" => Some(Self::Shopkeeper),
            _ => None,
        }
    }
}

/// Account role, selectable independently via the `role_types` checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Buyer,
    Seller,
}

impl Role {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BUYER" => Some(Self::Buyer),
            "SELLER" => Some(Self::Seller),
            _ => None,
        }
    }
}

/// Set of selected roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSet {
    buyer: bool,
    seller: bool,
}

impl RoleSet {
    /// Collect recognized role tags; unknown values are ignored.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        values
            .into_iter()
            .filter_map(Role::from_tag)
            .fold(Self::default(), |mut set, role| {
                set.insert(role);
                set
            })
    }

    pub fn insert(&mut self, role: Role) {
        match role {
            Role::Buyer => self.buyer = true,
            Role::Seller => self.seller = true,
        }
    }

    pub fn contains(&self, role: Role) -> bool {
        match role {
            Role::Buyer => self.buyer,
            Role::Seller => self.seller,
        }
    }
}

/// Body returned by `GET /favorites/{id}/toggle/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FavoriteResponse {
    pub favorite: bool,
}

/// Visual variant of the bookmark icon inside a favorite button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkIcon {
    Filled,
    Outline,
}

impl From<FavoriteResponse> for BookmarkIcon {
    fn from(resp: FavoriteResponse) -> Self {
        if resp.favorite {
            Self::Filled
        } else {
            Self::Outline
        }
    }
}
