//! Locale-stripping rewrite rules.
//!
//! For a multi-site deployment serving `en` and `zh`, three rules are emitted,
//! in first-match-wins order:
//!
//! ```text
//! /:locale(en|zh)/:path*  ->  /:path*
//! /:locale(en|zh)         ->  /
//! /:locale(en|zh)/        ->  /
//! ```

use super::prefix::PrefixStrategy;
use super::resolve::{discover_prefixes, is_multi_site};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// An internal path remap consumed by the external router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub source: String,
    pub destination: String,
}

impl RewriteRule {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Build the `a|b|c` disjunction over discovered prefixes.
///
/// Duplicates collapse to their first occurrence. Returns `None` when nothing
/// was discovered: an empty disjunction would match every path.
pub fn locale_alternation(
    raw_identifiers: &str,
    strategy: &impl PrefixStrategy,
) -> Option<String> {
    let mut seen = FxHashSet::default();
    let prefixes: Vec<&str> = discover_prefixes(raw_identifiers, strategy)
        .filter(|prefix| seen.insert(*prefix))
        .collect();

    (!prefixes.is_empty()).then(|| prefixes.join("|"))
}

/// Build the locale-stripping rewrite rules for an identifier list.
///
/// Empty for single-site lists and for lists where no identifier carries a
/// recognizable prefix.
pub fn build_rewrite_rules(
    raw_identifiers: &str,
    strategy: &impl PrefixStrategy,
) -> Vec<RewriteRule> {
    if !is_multi_site(raw_identifiers) {
        return Vec::new();
    }
    let Some(alt) = locale_alternation(raw_identifiers, strategy) else {
        return Vec::new();
    };

    vec![
        RewriteRule::new(format!("/:locale({alt})/:path*"), "/:path*"),
        RewriteRule::new(format!("/:locale({alt})"), "/"),
        RewriteRule::new(format!("/:locale({alt})/"), "/"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::PrefixConvention;

    fn hyphen() -> PrefixConvention {
        PrefixConvention::delimiter("-")
    }

    #[test]
    fn test_three_rules_in_order() {
        let rules = build_rewrite_rules("en-site1,zh-site2,en-site3", &hyphen());
        assert_eq!(
            rules,
            vec![
                RewriteRule::new("/:locale(en|zh)/:path*", "/:path*"),
                RewriteRule::new("/:locale(en|zh)", "/"),
                RewriteRule::new("/:locale(en|zh)/", "/"),
            ]
        );
    }

    #[test]
    fn test_single_site_has_no_rules() {
        assert!(build_rewrite_rules("site1", &hyphen()).is_empty());
        assert!(build_rewrite_rules("en-site1", &hyphen()).is_empty());
        assert!(build_rewrite_rules("", &hyphen()).is_empty());
    }

    #[test]
    fn test_no_prefix_has_no_rules() {
        assert!(build_rewrite_rules("site1,site2", &hyphen()).is_empty());
        assert!(build_rewrite_rules(",", &hyphen()).is_empty());
        assert!(build_rewrite_rules("-a,|b", &hyphen()).is_empty());
    }

    #[test]
    fn test_alternation_skips_unprefixed() {
        let alt = locale_alternation("base,ja-a,site,fr-b,ja-c", &hyphen());
        assert_eq!(alt.as_deref(), Some("ja|fr"));
    }

    #[test]
    fn test_alternation_never_empty() {
        assert_eq!(locale_alternation("a,b,c", &hyphen()), None);
    }

    #[test]
    fn test_rule_serialization_shape() {
        let rule = RewriteRule::new("/:locale(en)", "/");
        assert_eq!(
            serde_json::to_string(&rule).unwrap(),
            r#"{"source":"/:locale(en)","destination":"/"}"#
        );
    }
}
