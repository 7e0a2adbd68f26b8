use crate::server::model::catalog::Menu;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Lifecycle of a group order. `Open` accepts new submissions, `Locked`
/// rejects them; both transitions are organizer-triggered and always legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub(crate) enum GroupOrderStatus {
    #[display("open")]
    Open,
    #[display("locked")]
    Locked,
}

impl GroupOrderStatus {
    pub fn accepts_submissions(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl Default for GroupOrderStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// One shareable, lockable round of drinks against one menu snapshot.
/// `restaurant_name` and `menu_id` are captured at creation so later catalog
/// changes never reprice an order in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroupOrder {
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub menu_id: String,
    pub status: GroupOrderStatus,
    pub created_at: String,
    pub created_by: String,
}

/// One drink choice inside a submission. `menu_item_name`/`price` are
/// denormalized copies taken at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LineItem {
    pub menu_item_id: String,
    pub menu_item_name: String,
    pub price: u32,
    pub temperature: String,
    pub sugar_level: String,
    pub quantity: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> u64 {
        self.price as u64 * self.quantity as u64
    }
}

/// One person's set of drink selections, immutable after creation. Known as
/// an order item on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Submission {
    pub id: String,
    pub group_order_id: String,
    pub user_name: String,
    pub items: Vec<LineItem>,
    pub created_at: String,
}

impl Submission {
    /// Order total, by construction the sum of the line item subtotals.
    pub fn total(&self) -> u64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}

/// Group order plus its submissions (and menu, when a read asks for it).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroupOrderView {
    #[serde(flatten)]
    pub order: GroupOrder,
    pub order_items: Vec<Submission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<Menu>,
}

/// Why a submission was refused. User-actionable, not a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub(crate) enum SubmitError {
    #[display("order is locked")]
    Locked,
    #[display("group order not found")]
    NotFound,
    #[display("quantity must be at least 1")]
    BadQuantity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_accepts_locked_rejects() {
        assert!(GroupOrderStatus::Open.accepts_submissions());
        assert!(!GroupOrderStatus::Locked.accepts_submissions());
    }

    #[test]
    fn status_round_trips_through_json() {
        let open: GroupOrderStatus = serde_json::from_str("\"open\"").unwrap();
        let locked: GroupOrderStatus = serde_json::from_str("\"locked\"").unwrap();
        assert_eq!(open, GroupOrderStatus::Open);
        assert_eq!(locked, GroupOrderStatus::Locked);
        assert!(serde_json::from_str::<GroupOrderStatus>("\"closed\"").is_err());
    }

    #[test]
    fn submission_total_sums_line_subtotals() {
        let submission = Submission {
            id: "s1".to_string(),
            group_order_id: "g1".to_string(),
            user_name: "Alice".to_string(),
            items: vec![
                LineItem {
                    menu_item_id: "m1".to_string(),
                    menu_item_name: "珍珠奶茶".to_string(),
                    price: 50,
                    temperature: "少冰".to_string(),
                    sugar_level: "半糖".to_string(),
                    quantity: 2,
                },
                LineItem {
                    menu_item_id: "m2".to_string(),
                    menu_item_name: "檸檬綠茶".to_string(),
                    price: 40,
                    temperature: "去冰".to_string(),
                    sugar_level: "無糖".to_string(),
                    quantity: 1,
                },
            ],
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };
        assert_eq!(submission.total(), 140);
    }
}
