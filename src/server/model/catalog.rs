use serde::{Deserialize, Serialize};

/// One published drink on a menu. Immutable once confirmed by the organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct MenuItem {
    pub id: String,
    pub name: String,
    /// whole currency units, no minor unit
    pub price: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A restaurant's current menu. Replacing a menu means retiring this one and
/// publishing a new one, never editing items in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Menu {
    pub id: String,
    pub restaurant_id: String,
    pub items: Vec<MenuItem>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Restaurant {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

/// Restaurant together with its zero-or-one current menu, the shape list and
/// detail reads return.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RestaurantView {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub menu: Option<Menu>,
}

/// An unconfirmed menu item suggested by the recognition pipeline. Candidates
/// never reach storage on their own; the organizer picks the subset to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Candidate {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub category: String,
}
