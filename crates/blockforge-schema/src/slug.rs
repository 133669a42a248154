//! Slug derivation for record ids.

use std::sync::OnceLock;

use regex::Regex;

static NON_ALNUM: OnceLock<Regex> = OnceLock::new();

/// Derive a record id from a human-entered name: lower-case, every run of
/// non-alphanumeric characters collapsed to a single hyphen, leading and
/// trailing hyphens trimmed. Deterministic and idempotent.
pub fn derive_id(name: &str) -> String {
    let re = NON_ALNUM.get_or_init(|| Regex::new("[^a-z0-9]+").expect("valid slug pattern"));
    re.replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(derive_id("My Cool Block!"), "my-cool-block");
    }

    #[test]
    fn collapses_runs_and_trims_edges() {
        assert_eq!(derive_id("  --Foo--Bar--  "), "foo-bar");
    }

    #[test]
    fn is_idempotent() {
        let once = derive_id("Pricing Table (3 tiers)");
        assert_eq!(derive_id(&once), once);
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(derive_id("Hero 1"), "hero-1");
    }

    #[test]
    fn all_symbols_collapse_to_nothing() {
        assert_eq!(derive_id("!!!"), "");
    }
}
