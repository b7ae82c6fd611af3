//! Command-line interface definitions.

use clap::builder::FalseyValueParser;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Derive locale routing and framework configuration for a multi-site blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: blog.toml)
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "blog.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    #[command(flatten)]
    pub overrides: Overrides,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Values that override `blog.toml`, falling back to environment variables.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Comma-separated site identifiers
    #[arg(long, global = true, env = "NOTION_PAGE_ID")]
    pub page_ids: Option<String>,

    /// Default language
    #[arg(long, global = true, env = "NEXT_PUBLIC_LANG")]
    pub lang: Option<String>,

    /// Active theme
    #[arg(long, global = true, env = "NEXT_PUBLIC_THEME")]
    pub theme: Option<String>,

    /// Static export mode (disables i18n, rewrites, redirects and headers)
    #[arg(
        long,
        global = true,
        env = "EXPORT",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = FalseyValueParser::new()
    )]
    pub export: Option<bool>,

    /// Enable the bundle analyzer
    #[arg(
        long,
        global = true,
        env = "ANALYZE",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = FalseyValueParser::new()
    )]
    pub analyze: Option<bool>,

    /// API environment; `development` turns on source maps
    #[arg(long, global = true, env = "NODE_ENV_API")]
    pub api_env: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved locale set, default language first
    #[command(visible_alias = "l")]
    Locales {
        /// Print a JSON array instead of one locale per line
        #[arg(short, long)]
        json: bool,
    },

    /// Print the locale-stripping rewrite rules as JSON
    #[command(visible_alias = "r")]
    Rewrites {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Emit the complete framework configuration as JSON
    #[command(visible_alias = "e")]
    Emit {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// List the themes found in the themes directory
    #[command(visible_alias = "t")]
    Themes,

    /// Filter routes for static export, dropping excluded ones
    ExportPaths {
        /// Routes to filter. Use `-` to read routes from stdin (one per line).
        #[arg(value_name = "ROUTE")]
        routes: Vec<String>,
    },

    /// Remove stale sitemap.xml files before a build
    #[command(visible_alias = "p")]
    Prebuild {
        /// Package-manager lifecycle event; cleanup only runs for build/export
        #[arg(long, env = "npm_lifecycle_event")]
        lifecycle: Option<String>,
    },
}
