//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! lang = "en"                           # Default language
//! page_ids = "en:7c1d0b3f,zh:9a8e7c6d"  # Comma-separated site identifiers
//! theme = "simple"                      # Active theme directory name
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Site identity: default language, content sources and theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Default language, always served.
    pub lang: String,

    /// Comma-separated site identifiers, each optionally language-prefixed.
    pub page_ids: String,

    /// Active theme (a subdirectory of `build.themes_dir`).
    pub theme: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            page_ids: String::new(),
            theme: "simple".into(),
        }
    }
}

impl SiteSectionConfig {
    pub const LANG: FieldPath = FieldPath::new("site.lang");
    pub const PAGE_IDS: FieldPath = FieldPath::new("site.page_ids");
    pub const THEME: FieldPath = FieldPath::new("site.theme");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `lang` must be a non-empty route-safe token
    /// - `theme` must be non-empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let lang = self.lang.trim();
        if lang.is_empty() {
            diag.error_with_hint(
                Self::LANG,
                "default language must not be empty",
                format!("set {}, e.g.: \"en\"", Self::LANG),
            );
        } else if !lang
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            diag.error(
                Self::LANG,
                format!("'{lang}' may only contain letters, digits, '-' and '_'"),
            );
        }

        if self.theme.trim().is_empty() {
            diag.error(Self::THEME, "theme must not be empty");
        }

        if self.page_ids.trim().is_empty() {
            diag.warn(Self::PAGE_IDS, "no site identifiers configured");
        }
    }
}
