//! Locale directives derived from the site identifier list.
//!
//! | Module    | Purpose                                         |
//! |-----------|-------------------------------------------------|
//! | `prefix`  | Language prefix extraction (pluggable convention) |
//! | `resolve` | Ordered locale set, default language first      |
//! | `rewrite` | Locale-stripping rewrite rules                  |
//!
//! Everything here is pure and infallible: malformed identifiers are skipped,
//! the worst case being `{default_lang}` and no rewrites.

mod prefix;
mod resolve;
mod rewrite;

pub use prefix::{DEFAULT_DELIMITER, PrefixConvention, PrefixStrategy, extract_lang_prefix};
pub use resolve::{LocaleSet, discover_prefixes, is_multi_site, resolve_locales};
pub use rewrite::{RewriteRule, build_rewrite_rules, locale_alternation};
