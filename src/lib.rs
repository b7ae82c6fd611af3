//! sitecfg - locale directives and framework configuration for multi-site blogs.
//!
//! A deployment lists its content sources as comma-separated site
//! identifiers, optionally language-prefixed (`en:abc,zh:def`). From that
//! list and `blog.toml` this crate derives:
//!
//! - the locale set, default language first ([`locale::resolve_locales`])
//! - locale-stripping rewrite rules ([`locale::build_rewrite_rules`])
//! - the complete framework document ([`framework::FrameworkConfig`])

pub mod cli;
pub mod config;
pub mod framework;
pub mod locale;
pub mod logger;
pub mod prebuild;
pub mod theme;
pub mod utils;
