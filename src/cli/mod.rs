//! Command-line interface module.

mod args;
mod output;

pub use args::{Cli, Commands, Overrides};

use crate::{
    config::SiteConfig,
    framework::{FrameworkConfig, SiteDirectives, filter_export_paths},
    log, prebuild,
    theme::scan_themes,
    utils::fs::RealFs,
};
use anyhow::{Context, Result};
use output::{write_json, write_lines};
use std::io::{self, BufRead};

/// Run the selected subcommand against a loaded configuration.
pub fn run(command: &Commands, config: &SiteConfig) -> Result<()> {
    match command {
        Commands::Locales { json } => {
            let (locales, _) = SiteDirectives::locale_directives(config)?;
            if *json {
                write_json(&locales, false, None)
            } else {
                write_lines(locales.iter())
            }
        }
        Commands::Rewrites { pretty } => {
            let (_, rewrites) = SiteDirectives::locale_directives(config)?;
            if rewrites.is_empty() {
                log!("rewrites"; "no language prefixes found, nothing to rewrite");
            }
            write_json(&rewrites, *pretty, None)
        }
        Commands::Emit { pretty, output } => {
            let directives = SiteDirectives::init(config, &RealFs)?;
            let document = FrameworkConfig::assemble(config, &directives);
            write_json(&document, *pretty, output.as_deref())
        }
        Commands::Themes => {
            let themes = scan_themes(&RealFs, &config.build.themes_dir)?;
            write_lines(themes.iter().map(String::as_str))
        }
        Commands::ExportPaths { routes } => {
            let routes = read_routes(routes)?;
            let kept = filter_export_paths(
                routes.iter().map(String::as_str),
                &config.routes.export_exclude,
            );
            write_lines(kept.into_iter())
        }
        Commands::Prebuild { lifecycle } => {
            let removed = prebuild::clean_stale_sitemaps(
                &RealFs,
                config.get_root(),
                &config.build.public_dir,
                lifecycle.as_deref(),
            )?;
            if removed.is_empty() {
                log!("prebuild"; "nothing to clean");
            }
            Ok(())
        }
    }
}

/// Expand `-` into routes read from stdin, one per line.
fn read_routes(args: &[String]) -> Result<Vec<String>> {
    if args.len() != 1 || args[0] != "-" {
        return Ok(args.to_vec());
    }
    let mut routes = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read routes from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            routes.push(trimmed.to_string());
        }
    }
    Ok(routes)
}
