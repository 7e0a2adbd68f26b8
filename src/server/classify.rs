//! Keyword-based drink categorization, used to group a menu for display and
//! to fill in categories the recognizer left blank. Never persisted.

use crate::server::model::catalog::MenuItem;

/// First matching rule wins; order matters (奶茶 before 紅茶 so that
/// 「鮮奶紅茶」-style names land where a reader expects them).
const RULES: &[(&[&str], &str)] = &[
    (&["奶茶", "珍珠", "波霸"], "奶茶類"),
    (&["紅茶", "阿薩姆", "錫蘭"], "紅茶類"),
    (&["綠茶", "茉莉", "香片"], "綠茶類"),
    (&["烏龍", "青茶", "高山"], "烏龍茶類"),
    (&["鮮奶", "拿鐵", "牛奶"], "鮮奶茶類"),
    (&["多多", "果汁", "檸檬", "冬瓜", "仙草", "愛玉"], "特調類"),
];

const FALLBACK_CATEGORY: &str = "其他";

/// Preferred display order for grouped menus.
const CATEGORY_ORDER: &[&str] = &[
    "奶茶類",
    "紅茶類",
    "綠茶類",
    "烏龍茶類",
    "鮮奶茶類",
    "特調類",
    "其他",
];

pub(crate) fn classify(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    for (keywords, category) in RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return category;
        }
    }
    FALLBACK_CATEGORY
}

/// Group menu items for display: known categories in their preferred order
/// first, then any custom categories in first-appearance order.
pub(crate) fn group_by_category(items: &[MenuItem]) -> Vec<(String, Vec<MenuItem>)> {
    let mut groups: Vec<(String, Vec<MenuItem>)> = Vec::new();
    for item in items {
        let category = item
            .category
            .clone()
            .unwrap_or_else(|| classify(&item.name).to_string());
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((category, vec![item.clone()])),
        }
    }
    groups.sort_by_key(|(category, _)| {
        CATEGORY_ORDER
            .iter()
            .position(|c| *c == category.as_str())
            .unwrap_or(CATEGORY_ORDER.len())
    });
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_first_rule_wins() {
        assert_eq!(classify("珍珠奶茶"), "奶茶類");
        assert_eq!(classify("錫蘭紅茶"), "紅茶類");
        assert_eq!(classify("茉莉綠茶"), "綠茶類");
        assert_eq!(classify("高山青茶"), "烏龍茶類");
        assert_eq!(classify("觀音拿鐵"), "鮮奶茶類");
        assert_eq!(classify("蜂蜜檸檬"), "特調類");
        // 奶茶 rule sits above 紅茶, so a milk black tea is a milk tea
        assert_eq!(classify("紅茶奶茶"), "奶茶類");
    }

    #[test]
    fn unmatched_names_fall_through_to_other() {
        assert_eq!(classify("嗨神"), "其他");
        assert_eq!(classify(""), "其他");
    }

    #[test]
    fn grouping_respects_preferred_order_and_explicit_categories() {
        let item = |name: &str, category: Option<&str>| MenuItem {
            id: name.to_string(),
            name: name.to_string(),
            price: 50,
            category: category.map(str::to_string),
        };
        let menu = [
            item("蜂蜜檸檬", None),
            item("珍珠奶茶", None),
            item("嗨神", Some("店長推薦")),
            item("波霸奶茶", None),
        ];
        let groups = group_by_category(&menu);
        let names: Vec<_> = groups.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(names, vec!["奶茶類", "特調類", "店長推薦"]);
        assert_eq!(groups[0].1.len(), 2);
    }
}
