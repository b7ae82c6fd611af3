//! Locale set resolution.

use super::prefix::{PrefixStrategy, extract_lang_prefix};
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};

/// Ordered, duplicate-free set of locales.
///
/// The default language is always the first member. Further locales keep the
/// order in which they were first discovered so that derived output is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    langs: Vec<String>,
    seen: FxHashSet<String>,
}

impl LocaleSet {
    /// Create a set containing only the default language.
    pub fn new(default_lang: &str) -> Self {
        let mut set = Self {
            langs: Vec::new(),
            seen: FxHashSet::default(),
        };
        set.insert(default_lang);
        set
    }

    /// Append `lang` if not yet present. Returns `true` if it was added.
    pub fn insert(&mut self, lang: &str) -> bool {
        if self.seen.contains(lang) {
            return false;
        }
        self.seen.insert(lang.to_string());
        self.langs.push(lang.to_string());
        true
    }

    /// The default language.
    pub fn default_lang(&self) -> &str {
        &self.langs[0]
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.seen.contains(lang)
    }

    pub fn len(&self) -> usize {
        self.langs.len()
    }

    /// Always false: the default language is always present.
    pub fn is_empty(&self) -> bool {
        self.langs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.langs.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.langs
    }

    /// True when more than the default language is served.
    pub fn is_multilingual(&self) -> bool {
        self.langs.len() > 1
    }
}

impl Serialize for LocaleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

/// Whether the raw identifier list names more than one site.
///
/// Single-site deployments are assumed monolingual and are never parsed.
#[inline]
pub fn is_multi_site(raw_identifiers: &str) -> bool {
    raw_identifiers.contains(',')
}

/// Prefixes of every identifier in a comma-separated list, in list order.
///
/// Duplicates are kept; callers dedupe as needed.
pub fn discover_prefixes<'a, S: PrefixStrategy>(
    raw_identifiers: &'a str,
    strategy: &'a S,
) -> impl Iterator<Item = &'a str> + 'a {
    raw_identifiers
        .split(',')
        .filter_map(move |id| extract_lang_prefix(id, strategy))
}

/// Resolve the locale set served by a deployment.
///
/// Without a comma in `raw_identifiers` the result is `{default_lang}`.
/// Otherwise every discovered prefix is appended in first-seen order.
/// Unrecognized identifiers are skipped silently.
pub fn resolve_locales(
    default_lang: &str,
    raw_identifiers: &str,
    strategy: &impl PrefixStrategy,
) -> LocaleSet {
    let mut locales = LocaleSet::new(default_lang);
    if !is_multi_site(raw_identifiers) {
        return locales;
    }
    for prefix in discover_prefixes(raw_identifiers, strategy) {
        locales.insert(prefix);
    }
    locales
}
