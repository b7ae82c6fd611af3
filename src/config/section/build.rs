//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! export = false          # Static export: no i18n, rewrites, redirects, headers
//! analyze = false         # Wrap the output with the bundle analyzer
//! dist_dir = "dist"       # Framework output directory
//! themes_dir = "themes"   # Theme root, one subdirectory per theme
//! public_dir = "public"   # Static files directory
//! page_timeout = 120      # Static page generation timeout (seconds)
//! source_maps = false     # Emit source maps (also on when NODE_ENV_API=development)
//! ignore_lint = true      # Skip lint errors during builds
//! scroll_restoration = true
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Static export mode.
    pub export: bool,

    /// Enable the bundle analyzer.
    pub analyze: bool,

    /// Framework output directory (relative to the project root).
    pub dist_dir: PathBuf,

    /// Theme root directory.
    pub themes_dir: PathBuf,

    /// Public static files directory.
    pub public_dir: PathBuf,

    /// Static page generation timeout in seconds.
    pub page_timeout: u32,

    /// Emit source maps.
    pub source_maps: bool,

    /// Do not fail builds on lint errors.
    pub ignore_lint: bool,

    /// Restore scroll position on client-side navigation.
    pub scroll_restoration: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            export: false,
            analyze: false,
            dist_dir: "dist".into(),
            themes_dir: "themes".into(),
            public_dir: "public".into(),
            page_timeout: 120,
            source_maps: false,
            ignore_lint: true,
            scroll_restoration: true,
        }
    }
}

impl BuildSectionConfig {
    pub const DIST_DIR: FieldPath = FieldPath::new("build.dist_dir");
    pub const PAGE_TIMEOUT: FieldPath = FieldPath::new("build.page_timeout");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.page_timeout == 0 {
            diag.error(Self::PAGE_TIMEOUT, "timeout must be at least 1 second");
        }
        if self.dist_dir.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::DIST_DIR,
                "output directory must not be empty",
                format!("set {}, e.g.: \"dist\"", Self::DIST_DIR),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};
    use std::path::Path;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert!(!config.build.export);
        assert!(!config.build.analyze);
        assert_eq!(config.build.dist_dir, Path::new("dist"));
        assert_eq!(config.build.themes_dir, Path::new("themes"));
        assert_eq!(config.build.page_timeout, 120);
        assert!(config.build.ignore_lint);
        assert!(config.build.scroll_restoration);
    }

    #[test]
    fn test_build_partial_override() {
        let config = test_parse_config("[build]\nexport = true\npage_timeout = 60");
        assert!(config.build.export);
        assert_eq!(config.build.page_timeout, 60);
        assert_eq!(config.build.public_dir, Path::new("public"));
    }

    #[test]
    fn test_validate_timeout() {
        let config = test_parse_config("[build]\npage_timeout = 0\ndist_dir = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
