//! `[locale]` section configuration.
//!
//! Selects how a language prefix is encoded in a site identifier.
//!
//! # Example
//!
//! ```toml
//! [locale]
//! convention = "delimiter"   # "delimiter" | "pattern"
//! delimiter = ":"            # zh:abc123 -> zh
//!
//! # or
//! [locale]
//! convention = "pattern"
//! pattern = "^([a-z]{2})_"   # capture group 1 is the prefix
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::locale::{DEFAULT_DELIMITER, PrefixConvention};
use serde::{Deserialize, Serialize};

/// Which prefix convention to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConventionKind {
    #[default]
    Delimiter,
    Pattern,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSectionConfig {
    /// Prefix convention kind.
    pub convention: ConventionKind,

    /// Separator between prefix and identifier (`delimiter` convention).
    pub delimiter: String,

    /// Regular expression whose first capture group is the prefix
    /// (`pattern` convention).
    pub pattern: Option<String>,
}

impl Default for LocaleSectionConfig {
    fn default() -> Self {
        Self {
            convention: ConventionKind::Delimiter,
            delimiter: DEFAULT_DELIMITER.into(),
            pattern: None,
        }
    }
}

impl LocaleSectionConfig {
    pub const CONVENTION: FieldPath = FieldPath::new("locale.convention");
    pub const DELIMITER: FieldPath = FieldPath::new("locale.delimiter");
    pub const PATTERN: FieldPath = FieldPath::new("locale.pattern");

    /// Build the configured prefix convention.
    pub fn prefix_convention(&self) -> Result<PrefixConvention, regex::Error> {
        match self.convention {
            ConventionKind::Delimiter => Ok(PrefixConvention::delimiter(&self.delimiter)),
            ConventionKind::Pattern => {
                PrefixConvention::pattern(self.pattern.as_deref().unwrap_or_default())
            }
        }
    }

    /// Validate locale configuration.
    ///
    /// # Checks
    /// - `delimiter` convention: non-empty, no comma (the list separator)
    /// - `pattern` convention: pattern set, compiles, has a capture group
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.convention {
            ConventionKind::Delimiter => {
                if self.delimiter.is_empty() {
                    diag.error_with_hint(
                        Self::DELIMITER,
                        "delimiter must not be empty",
                        format!("set {}, e.g.: \":\"", Self::DELIMITER),
                    );
                } else if self.delimiter.contains(',') {
                    diag.error(
                        Self::DELIMITER,
                        "delimiter must not contain ',' (it separates site identifiers)",
                    );
                }
            }
            ConventionKind::Pattern => match self.pattern.as_deref() {
                None | Some("") => diag.error_with_hint(
                    Self::PATTERN,
                    format!("{} is \"pattern\" but no pattern is set", Self::CONVENTION),
                    format!("set {}, e.g.: \"^([a-z]{{2}})_\"", Self::PATTERN),
                ),
                Some(_) => {
                    if let Err(e) = self.prefix_convention() {
                        diag.error(Self::PATTERN, format!("invalid pattern: {e}"));
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::locale::extract_lang_prefix;

    #[test]
    fn test_locale_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.locale.convention, ConventionKind::Delimiter);
        assert_eq!(config.locale.delimiter, ":");
        assert!(config.locale.pattern.is_none());
    }

    #[test]
    fn test_delimiter_convention() {
        let config = test_parse_config("[locale]\ndelimiter = \"-\"");
        let conv = config.locale.prefix_convention().unwrap();
        assert_eq!(extract_lang_prefix("en-site1", &conv), Some("en"));
    }

    #[test]
    fn test_pattern_convention() {
        let config =
            test_parse_config("[locale]\nconvention = \"pattern\"\npattern = \"^([a-z]{2})_\"");
        let conv = config.locale.prefix_convention().unwrap();
        assert_eq!(extract_lang_prefix("de_abc", &conv), Some("de"));
    }

    #[test]
    fn test_unknown_convention_rejected() {
        let result: Result<crate::config::SiteConfig, _> =
            toml::from_str("[locale]\nconvention = \"suffix\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_delimiter() {
        let mut diag = ConfigDiagnostics::new();
        test_parse_config("[locale]\ndelimiter = \"\"")
            .locale
            .validate(&mut diag);
        test_parse_config("[locale]\ndelimiter = \",\"")
            .locale
            .validate(&mut diag);
        assert_eq!(diag.len(), 2);
        assert!(diag.errors().iter().all(|e| e.field == LocaleSectionConfig::DELIMITER));
    }

    #[test]
    fn test_validate_pattern() {
        let mut diag = ConfigDiagnostics::new();
        test_parse_config("[locale]\nconvention = \"pattern\"")
            .locale
            .validate(&mut diag);
        test_parse_config("[locale]\nconvention = \"pattern\"\npattern = \"[a-z\"")
            .locale
            .validate(&mut diag);
        test_parse_config("[locale]\nconvention = \"pattern\"\npattern = \"^[a-z]+_\"")
            .locale
            .validate(&mut diag);
        assert_eq!(diag.len(), 3);

        let mut diag = ConfigDiagnostics::new();
        test_parse_config("[locale]\nconvention = \"pattern\"\npattern = \"^([a-z]+)_\"")
            .locale
            .validate(&mut diag);
        assert!(diag.is_empty());
    }
}
