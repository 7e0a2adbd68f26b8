//! Turns raw recognizer output into validated menu item candidates.

use crate::server::classify::classify;
use crate::server::model::catalog::Candidate;
use crate::server::util::id;
use serde_json::Value;

const MAX_NAME_CHARS: usize = 50;
const MAX_PRICE: u64 = 500;

/// Parse raw model output into candidates. Never fails: anything that does
/// not contain a parseable JSON array normalizes to an empty suggestion list,
/// and implausible entries are dropped one by one without aborting the batch.
pub(crate) fn extract_candidates(raw: &str) -> Vec<Candidate> {
    let Some(slice) = first_balanced_array(raw) else {
        return Vec::new();
    };
    let Ok(values) = serde_json::from_str::<Vec<Value>>(slice) else {
        return Vec::new();
    };

    values
        .iter()
        .filter_map(|value| {
            let (name, price, category) = validate(value)?;
            Some(Candidate {
                id: id::generate("item"),
                name: name.to_string(),
                price,
                category: category
                    .map(str::to_string)
                    .unwrap_or_else(|| classify(name).to_string()),
            })
        })
        .collect()
}

/// Best-effort bracket match: the first `[` through its balancing `]`.
fn first_balanced_array(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let mut depth = 0usize;
    for (offset, c) in raw[start..].char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// A candidate survives only when its name length is strictly between 1 and
/// 50 characters and its price is a whole number strictly between 0 and 500.
fn validate(value: &Value) -> Option<(&str, u32, Option<&str>)> {
    let name = value.get("name")?.as_str()?.trim();
    let len = name.chars().count();
    if len <= 1 || len >= MAX_NAME_CHARS {
        return None;
    }

    let price = value.get("price")?;
    let price = price.as_u64().or_else(|| {
        price
            .as_f64()
            .filter(|p| *p > 0.0 && p.fract() == 0.0)
            .map(|p| p as u64)
    })?;
    if price == 0 || price >= MAX_PRICE {
        return None;
    }

    let category = value.get("category").and_then(Value::as_str);
    Some((name, price as u32, category))
}
