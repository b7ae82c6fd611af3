//! Language prefix extraction from site identifiers.
//!
//! A site identifier may carry a language prefix, e.g. `zh:4f1c...` with the
//! default `:` delimiter, or `en-site1` with a `-` delimiter. How the prefix
//! is encoded is owned by the content store, so the convention is pluggable:
//!
//! | Convention  | Prefix is                                     |
//! |-------------|-----------------------------------------------|
//! | `Delimiter` | token before the first occurrence of the delimiter |
//! | `Pattern`   | capture group 1 of a regular expression       |

use regex::Regex;

/// Default delimiter between prefix and identifier (`zh:abc123`).
pub const DEFAULT_DELIMITER: &str = ":";

/// Strategy for finding a language prefix inside a site identifier.
pub trait PrefixStrategy {
    /// Return the raw candidate prefix, before charset checks.
    fn candidate<'a>(&self, identifier: &'a str) -> Option<&'a str>;
}

/// Built-in prefix conventions.
#[derive(Debug, Clone)]
pub enum PrefixConvention {
    /// Prefix is the leading token before `delimiter`.
    Delimiter(String),
    /// Prefix is capture group 1 of the pattern.
    Pattern(Regex),
}

impl Default for PrefixConvention {
    fn default() -> Self {
        Self::Delimiter(DEFAULT_DELIMITER.to_string())
    }
}

impl PrefixConvention {
    /// Delimiter convention with a custom separator.
    pub fn delimiter(delimiter: impl Into<String>) -> Self {
        Self::Delimiter(delimiter.into())
    }

    /// Pattern convention; the pattern must have at least one capture group.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        if regex.captures_len() < 2 {
            return Err(regex::Error::Syntax(format!(
                "pattern `{pattern}` has no capture group for the language prefix"
            )));
        }
        Ok(Self::Pattern(regex))
    }
}

impl PrefixStrategy for PrefixConvention {
    fn candidate<'a>(&self, identifier: &'a str) -> Option<&'a str> {
        match self {
            Self::Delimiter(delimiter) => {
                if delimiter.is_empty() {
                    return None;
                }
                let (prefix, rest) = identifier.split_once(delimiter.as_str())?;
                (!rest.is_empty()).then_some(prefix)
            }
            Self::Pattern(regex) => regex
                .captures(identifier)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
        }
    }
}

/// Extract the language prefix from a site identifier.
///
/// Never fails: empty or malformed identifiers yield `None`. A prefix is only
/// recognized when it is non-empty and made of ASCII alphanumerics, `-` or
/// `_`, which keeps it safe to embed in a route pattern disjunction.
///
/// # Examples
/// ```ignore
/// let hyphen = PrefixConvention::delimiter("-");
/// extract_lang_prefix("en-site1", &hyphen)  -> Some("en")
/// extract_lang_prefix("site1", &hyphen)     -> None
/// extract_lang_prefix("zh:abc", &PrefixConvention::default()) -> Some("zh")
/// ```
pub fn extract_lang_prefix<'a>(
    identifier: &'a str,
    strategy: &impl PrefixStrategy,
) -> Option<&'a str> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }
    strategy
        .candidate(identifier)
        .map(str::trim)
        .filter(|prefix| is_route_safe(prefix))
}

/// Non-empty and limited to `[A-Za-z0-9_-]`.
fn is_route_safe(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
