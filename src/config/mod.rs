//! Site configuration management for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file lookup, directory resolution
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `[site]`    | Default language, site identifiers, theme          |
//! | `[locale]`  | Language prefix convention                         |
//! | `[build]`   | Export mode, analyzer, output and theme paths      |
//! | `[images]`  | Remote image hosts and formats                     |
//! | `[routes]`  | Feed redirect, `.html` rewrite, export exclusions  |
//! | `[headers]` | CORS response headers                              |
//!
//! Values are resolved in order: built-in defaults, `blog.toml`, then CLI
//! flags (which fall back to environment variables such as `NOTION_PAGE_ID`
//! and `EXPORT`).

pub mod section;
pub mod types;
mod util;

pub use section::{
    BuildSectionConfig, ConventionKind, HeadersConfig, ImagesConfig, LocaleSectionConfig,
    RoutesConfig, SiteSectionConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Severity};

use crate::{
    cli::{Cli, Overrides},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{find_config_file, resolve_dir};

/// `NODE_ENV_API` value that forces source maps on.
const DEVELOPMENT_API_ENV: &str = "development";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing blog.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub locale: LocaleSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub headers: HeadersConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when no file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cli.config).unwrap_or_else(|| cwd.join(&cli.config));
        Self::load_at(config_path, &cli.overrides)
    }

    /// Load configuration from an explicit path and apply overrides.
    ///
    /// A missing file is not an error: deployments may be configured purely
    /// through environment variables.
    pub fn load_at(config_path: PathBuf, overrides: &Overrides) -> Result<Self> {
        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            log!("hint"; "{} not found, using defaults", config_path.display());
            Self::default()
        };

        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.finalize(&root, overrides);
        config.validate()?;

        debug!("config"; "root: {}", config.root.display());
        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, root: &Path, overrides: &Overrides) {
        self.root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        self.apply_overrides(overrides);
        self.build.themes_dir = resolve_dir(&self.build.themes_dir, &self.root);
        self.build.public_dir = resolve_dir(&self.build.public_dir, &self.root);
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Directory of the active theme.
    pub fn theme_dir(&self) -> PathBuf {
        self.build.themes_dir.join(&self.site.theme)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply CLI/environment overrides.
    fn apply_overrides(&mut self, overrides: &Overrides) {
        crate::logger::set_verbose(overrides.verbose);

        Self::update_option(&mut self.site.page_ids, overrides.page_ids.as_ref());
        Self::update_option(&mut self.site.lang, overrides.lang.as_ref());
        Self::update_option(&mut self.site.theme, overrides.theme.as_ref());
        Self::update_option(&mut self.build.export, overrides.export.as_ref());
        Self::update_option(&mut self.build.analyze, overrides.analyze.as_ref());
        if overrides.api_env.as_deref() == Some(DEVELOPMENT_API_ENV) {
            self.build.source_maps = true;
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.locale.validate(&mut diag);
        self.build.validate(&mut diag);
        self.images.validate(&mut diag);
        self.routes.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Invalid)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config fragment.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result: Result<SiteConfig, _> = toml::from_str("[site\nlang = \"en\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.locale.delimiter, ":");
        assert!(!config.build.export);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nlang = \"en\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.lang, "en");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored("[site]\nlang = \"fr\"").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_load_at_resolves_dirs() {
        let (dir, path) =
            write_config("[site]\npage_ids = \"a,b\"\n[build]\nthemes_dir = \"skins\"");
        fs::create_dir(dir.path().join("skins")).unwrap();

        let config = SiteConfig::load_at(path, &Overrides::default()).unwrap();
        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.get_root(), root);
        assert_eq!(config.build.themes_dir, root.join("skins"));
        assert_eq!(config.build.public_dir, root.join("public"));
        assert_eq!(config.theme_dir(), root.join("skins").join("simple"));
    }

    #[test]
    fn test_load_at_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            SiteConfig::load_at(dir.path().join("blog.toml"), &Overrides::default()).unwrap();
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.get_root(), dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let (_dir, path) = write_config(
            "[site]\nlang = \"en\"\npage_ids = \"one\"\ntheme = \"simple\"\n[build]\nexport = true",
        );
        let overrides = Overrides {
            page_ids: Some("en:a,zh:b".into()),
            lang: Some("zh".into()),
            theme: Some("hexo".into()),
            export: Some(false),
            analyze: Some(true),
            api_env: None,
            verbose: false,
        };
        let config = SiteConfig::load_at(path, &overrides).unwrap();
        assert_eq!(config.site.page_ids, "en:a,zh:b");
        assert_eq!(config.site.lang, "zh");
        assert_eq!(config.site.theme, "hexo");
        assert!(!config.build.export);
        assert!(config.build.analyze);
    }

    #[test]
    fn test_development_api_env_enables_source_maps() {
        let (_dir, path) = write_config("[build]\nsource_maps = false");
        let overrides = Overrides {
            api_env: Some("development".into()),
            ..Overrides::default()
        };
        assert!(SiteConfig::load_at(path.clone(), &overrides).unwrap().build.source_maps);

        let overrides = Overrides {
            api_env: Some("production".into()),
            ..Overrides::default()
        };
        assert!(!SiteConfig::load_at(path, &overrides).unwrap().build.source_maps);
    }

    #[test]
    fn test_load_at_reports_all_errors() {
        let (_dir, path) = write_config(
            "[site]\nlang = \"\"\n[locale]\ndelimiter = \"\"\n[routes]\nfeed = \"feed.xml\"",
        );
        let err = SiteConfig::load_at(path, &Overrides::default()).unwrap_err();
        let Some(ConfigError::Invalid(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_load_at_invalid_toml() {
        let (_dir, path) = write_config("[site\n");
        let err = SiteConfig::load_at(path, &Overrides::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Parse(_))
        ));
    }
}
