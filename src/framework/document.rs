//! Framework configuration document.
//!
//! Assembles everything the web framework needs from the site config and
//! the derived directives. Serialized as camelCase JSON:
//!
//! ```json
//! {
//!   "distDir": "dist",
//!   "i18n": { "defaultLocale": "en", "locales": ["en", "zh"] },
//!   "rewrites": [{ "source": "/:locale(en|zh)/:path*", "destination": "/:path*" }, ...],
//!   ...
//! }
//! ```
//!
//! In static export mode, server-only sections (`i18n`, `redirects`,
//! `rewrites`, `headers`) are omitted.

use super::SiteDirectives;
use crate::config::SiteConfig;
use crate::locale::{LocaleSet, RewriteRule};
use rustc_hash::FxHashSet;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// Alias for the project root in module imports.
const ROOT_ALIAS: &str = "@";
/// Alias for the active theme's component directory.
const THEME_ALIAS: &str = "@theme-components";
/// Route pattern matching every path, with or without trailing slash.
const ALL_ROUTES: &str = "/:path*{/}?";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    pub default_locale: String,
    pub locales: LocaleSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub source: String,
    pub destination: String,
    pub permanent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderRule {
    pub source: String,
    pub headers: Vec<Header>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImagesSection {
    pub formats: Vec<String>,
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    pub ignore_during_builds: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentalConfig {
    pub scroll_restoration: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RuntimeConfig {
    pub themes: Vec<String>,
}

/// The document handed to the framework.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'static str>,
    pub dist_dir: String,
    pub static_page_generation_timeout: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<I18nConfig>,
    pub images: ImagesSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirects: Option<Vec<Redirect>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewrites: Option<Vec<RewriteRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<HeaderRule>>,
    pub resolve_alias: Map<String, JsonValue>,
    pub export_exclude: Vec<String>,
    pub bundle_analyzer: bool,
    pub source_maps: bool,
    pub eslint: LintConfig,
    pub experimental: ExperimentalConfig,
    pub public_runtime_config: RuntimeConfig,
}

impl FrameworkConfig {
    /// Assemble the document. Server-only sections are `None` in export mode.
    pub fn assemble(config: &SiteConfig, directives: &SiteDirectives) -> Self {
        let server = !config.build.export;

        Self {
            output: config.build.export.then_some("export"),
            dist_dir: config.build.dist_dir.to_string_lossy().into_owned(),
            static_page_generation_timeout: config.build.page_timeout,
            i18n: server.then(|| I18nConfig {
                default_locale: directives.locales.default_lang().to_string(),
                locales: directives.locales.clone(),
            }),
            images: ImagesSection {
                formats: config.images.formats.clone(),
                domains: config.images.domains.clone(),
            },
            redirects: server.then(|| redirects(config)),
            rewrites: server.then(|| rewrites(config, &directives.rewrites)),
            headers: server.then(|| headers(config)),
            resolve_alias: resolve_alias(config),
            export_exclude: config.routes.export_exclude.clone(),
            bundle_analyzer: config.build.analyze,
            source_maps: config.build.source_maps,
            eslint: LintConfig {
                ignore_during_builds: config.build.ignore_lint,
            },
            experimental: ExperimentalConfig {
                scroll_restoration: config.build.scroll_restoration,
            },
            public_runtime_config: RuntimeConfig {
                themes: directives.themes.clone(),
            },
        }
    }
}

/// `/feed` permanently redirects to the configured feed file.
fn redirects(config: &SiteConfig) -> Vec<Redirect> {
    vec![Redirect {
        source: "/feed".into(),
        destination: config.routes.feed.clone(),
        permanent: true,
    }]
}

/// Locale rules first, then the optional `.html` suffix rule.
fn rewrites(config: &SiteConfig, locale_rules: &[RewriteRule]) -> Vec<RewriteRule> {
    let mut rules = locale_rules.to_vec();
    if config.routes.strip_html {
        rules.push(RewriteRule::new("/:path*.html", "/:path*"));
    }
    rules
}

fn headers(config: &SiteConfig) -> Vec<HeaderRule> {
    let h = &config.headers;
    if !h.enable {
        return Vec::new();
    }
    let pairs = [
        ("Access-Control-Allow-Credentials", h.allow_credentials.to_string()),
        ("Access-Control-Allow-Origin", h.allow_origin.clone()),
        ("Access-Control-Allow-Methods", h.allow_methods.clone()),
        ("Access-Control-Allow-Headers", h.allow_headers.clone()),
    ];
    vec![HeaderRule {
        source: ALL_ROUTES.into(),
        headers: pairs
            .into_iter()
            .map(|(key, value)| Header {
                key: key.into(),
                value,
            })
            .collect(),
    }]
}

fn resolve_alias(config: &SiteConfig) -> Map<String, JsonValue> {
    let mut aliases = Map::new();
    aliases.insert(
        ROOT_ALIAS.into(),
        JsonValue::String(config.get_root().to_string_lossy().into_owned()),
    );
    aliases.insert(
        THEME_ALIAS.into(),
        JsonValue::String(config.theme_dir().to_string_lossy().into_owned()),
    );
    aliases
}

/// Drop excluded routes from an export path map, keeping order.
pub fn filter_export_paths<'a>(
    paths: impl IntoIterator<Item = &'a str>,
    exclude: &[String],
) -> Vec<&'a str> {
    let excluded: FxHashSet<&str> = exclude.iter().map(String::as_str).collect();
    paths
        .into_iter()
        .filter(|path| !excluded.contains(path))
        .collect()
}
