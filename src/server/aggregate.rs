//! Merges every person's submissions into the per-item totals the organizer
//! watches while the round is running.

use crate::server::model::order::Submission;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderSummary {
    pub per_item: Vec<PerItemSummary>,
    pub total_items: u64,
    pub total_price: u64,
    pub submission_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PerItemSummary {
    pub menu_item_id: String,
    pub menu_item_name: String,
    pub price: u32,
    /// accumulated across line items, wider than any single quantity so the
    /// running sum cannot overflow
    pub quantity: u64,
    pub details: Vec<SummaryDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryDetail {
    pub user_name: String,
    pub temperature: String,
    pub sugar_level: String,
    pub quantity: u32,
}

/// Pure function of the full submission set: no hidden state, identical input
/// gives identical output. Items appear in first-appearance order so the view
/// stays put across polling refreshes. Name and price come from the first
/// line item seen per menu item id; all copies are expected to agree since
/// they were denormalized from the same menu snapshot.
pub(crate) fn summarize(submissions: &[Submission]) -> OrderSummary {
    let mut per_item: Vec<PerItemSummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for submission in submissions {
        for line in &submission.items {
            let slot = *index.entry(line.menu_item_id.clone()).or_insert_with(|| {
                per_item.push(PerItemSummary {
                    menu_item_id: line.menu_item_id.clone(),
                    menu_item_name: line.menu_item_name.clone(),
                    price: line.price,
                    quantity: 0,
                    details: Vec::new(),
                });
                per_item.len() - 1
            });
            per_item[slot].quantity += line.quantity as u64;
            per_item[slot].details.push(SummaryDetail {
                user_name: submission.user_name.clone(),
                temperature: line.temperature.clone(),
                sugar_level: line.sugar_level.clone(),
                quantity: line.quantity,
            });
        }
    }

    let total_items = per_item.iter().map(|item| item.quantity).sum();
    let total_price = per_item
        .iter()
        .map(|item| item.price as u64 * item.quantity)
        .sum();

    OrderSummary {
        per_item,
        total_items,
        total_price,
        submission_count: submissions.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::order::LineItem;

    fn line(id: &str, name: &str, price: u32, quantity: u32) -> LineItem {
        LineItem {
            menu_item_id: id.to_string(),
            menu_item_name: name.to_string(),
            price,
            temperature: "正常冰".to_string(),
            sugar_level: "正常糖".to_string(),
            quantity,
        }
    }

    fn submission(id: &str, user: &str, items: Vec<LineItem>) -> Submission {
        Submission {
            id: id.to_string(),
            group_order_id: "g1".to_string(),
            user_name: user.to_string(),
            items,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn empty_round_has_zero_totals() {
        let summary = summarize(&[]);
        assert!(summary.per_item.is_empty());
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total_price, 0);
        assert_eq!(summary.submission_count, 0);
    }

    #[test]
    fn alice_and_bob_share_a_milk_tea_row() {
        let submissions = vec![
            submission(
                "s1",
                "Alice",
                vec![LineItem {
                    temperature: "少冰".to_string(),
                    sugar_level: "半糖".to_string(),
                    ..line("m1", "Milk Tea", 50, 2)
                }],
            ),
            submission("s2", "Bob", vec![line("m1", "Milk Tea", 50, 1)]),
        ];

        let summary = summarize(&submissions);
        assert_eq!(summary.per_item.len(), 1);
        let row = &summary.per_item[0];
        assert_eq!(row.menu_item_name, "Milk Tea");
        assert_eq!(row.price, 50);
        assert_eq!(row.quantity, 3);
        assert_eq!(row.details.len(), 2);
        assert_eq!(row.details[0].user_name, "Alice");
        assert_eq!(row.details[0].quantity, 2);
        assert_eq!(row.details[0].temperature, "少冰");
        assert_eq!(row.details[1].user_name, "Bob");
        assert_eq!(row.details[1].quantity, 1);
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.total_price, 150);
        assert_eq!(summary.submission_count, 2);
    }

    #[test]
    fn summarize_is_idempotent() {
        let submissions = vec![
            submission("s1", "Alice", vec![line("m1", "珍珠奶茶", 50, 2)]),
            submission("s2", "Bob", vec![line("m2", "檸檬綠茶", 45, 1)]),
        ];
        assert_eq!(summarize(&submissions), summarize(&submissions));
    }

    #[test]
    fn totals_are_invariant_under_permutation() {
        let a = submission(
            "s1",
            "Alice",
            vec![line("m1", "珍珠奶茶", 50, 2), line("m2", "檸檬綠茶", 45, 1)],
        );
        let b = submission("s2", "Bob", vec![line("m2", "檸檬綠茶", 45, 3)]);
        let c = submission("s3", "Carol", vec![line("m1", "珍珠奶茶", 50, 1)]);

        let forward = summarize(&[a.clone(), b.clone(), c.clone()]);
        let backward = summarize(&[c, b, a]);

        assert_eq!(forward.total_items, backward.total_items);
        assert_eq!(forward.total_price, backward.total_price);
        assert_eq!(forward.submission_count, backward.submission_count);
        for row in &forward.per_item {
            let other = backward
                .per_item
                .iter()
                .find(|r| r.menu_item_id == row.menu_item_id)
                .expect("row present under permutation");
            assert_eq!(row.quantity, other.quantity);
            assert_eq!(row.price, other.price);
        }
    }

    #[test]
    fn rows_keep_first_appearance_order() {
        let submissions = vec![
            submission("s1", "Alice", vec![line("m2", "檸檬綠茶", 45, 1)]),
            submission("s2", "Bob", vec![line("m1", "珍珠奶茶", 50, 1)]),
            submission("s3", "Carol", vec![line("m2", "檸檬綠茶", 45, 2)]),
        ];
        let ids: Vec<_> = summarize(&submissions)
            .per_item
            .iter()
            .map(|r| r.menu_item_id.clone())
            .collect();
        assert_eq!(ids, vec!["m2", "m1"]);
    }

    #[test]
    fn quantities_near_u32_max_do_not_overflow() {
        // quantity is client-supplied and only bounded below, so the running
        // sums must be wider than any single line item
        let submissions = vec![
            submission("s1", "Alice", vec![line("m1", "珍珠奶茶", 1, u32::MAX)]),
            submission("s2", "Bob", vec![line("m1", "珍珠奶茶", 1, 1)]),
        ];
        let summary = summarize(&submissions);
        let expected = u32::MAX as u64 + 1;
        assert_eq!(summary.per_item[0].quantity, expected);
        assert_eq!(summary.total_items, expected);
        assert_eq!(summary.total_price, expected);
    }

    #[test]
    fn first_seen_price_and_name_stick() {
        // both copies are expected to agree in practice; the engine just
        // keeps the first one rather than enforcing it
        let submissions = vec![
            submission("s1", "Alice", vec![line("m1", "珍珠奶茶", 50, 1)]),
            submission("s2", "Bob", vec![line("m1", "珍奶", 55, 1)]),
        ];
        let summary = summarize(&submissions);
        assert_eq!(summary.per_item[0].menu_item_name, "珍珠奶茶");
        assert_eq!(summary.per_item[0].price, 50);
        assert_eq!(summary.per_item[0].quantity, 2);
        assert_eq!(summary.total_price, 100);
    }
}
