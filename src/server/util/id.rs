use crate::server::util::time;
use rand::distributions::Alphanumeric;
use rand::Rng;

const SUFFIX_LEN: usize = 9;

/// Opaque unique token, e.g. `item-1731294000000-x8k2mda1q`.
pub(crate) fn generate(prefix: &str) -> String {
    let millis = time::helper::get_utc_now().timestamp_millis();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    format!("{prefix}-{millis}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix_and_differ() {
        let a = generate("item");
        let b = generate("item");
        assert!(a.starts_with("item-"));
        assert_ne!(a, b);
    }
}
