//! One-shot derivation of locale directives and themes.

use crate::config::SiteConfig;
use crate::locale::{LocaleSet, RewriteRule, build_rewrite_rules, resolve_locales};
use crate::theme::scan_themes;
use crate::utils::fs::FileSystem;
use crate::{debug, log};
use anyhow::{Context, Result};

/// Values derived once at process start and passed to whatever needs them.
#[derive(Debug, Clone)]
pub struct SiteDirectives {
    /// Locales served, default language first.
    pub locales: LocaleSet,
    /// Locale-stripping rewrite rules (empty for single-locale sites).
    pub rewrites: Vec<RewriteRule>,
    /// Discovered theme names.
    pub themes: Vec<String>,
}

impl SiteDirectives {
    /// Derive every directive from `config`, scanning themes through `fs`.
    pub fn init(config: &SiteConfig, fs: &impl FileSystem) -> Result<Self> {
        let (locales, rewrites) = Self::locale_directives(config)?;
        let themes = scan_themes(fs, &config.build.themes_dir)?;

        if !themes.contains(&config.site.theme) {
            let themes_dir = config.build.themes_dir.display();
            log!("warning"; "theme '{}' not found in {}", config.site.theme, themes_dir);
        }

        Ok(Self {
            locales,
            rewrites,
            themes,
        })
    }

    /// Locale set and rewrite rules only; no filesystem access.
    pub fn locale_directives(config: &SiteConfig) -> Result<(LocaleSet, Vec<RewriteRule>)> {
        let convention = config
            .locale
            .prefix_convention()
            .context("invalid locale convention")?;
        let page_ids = &config.site.page_ids;

        for id in page_ids.split(',').filter(|id| !id.trim().is_empty()) {
            debug!("locales"; "site identifier: {}", id.trim());
        }

        let locales = resolve_locales(config.site.lang.trim(), page_ids, &convention);
        let rewrites = build_rewrite_rules(page_ids, &convention);
        debug!("locales"; "{} locale(s), {} rewrite rule(s)", locales.len(), rewrites.len());

        Ok((locales, rewrites))
    }
}
