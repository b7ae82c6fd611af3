use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitecfg::{cli::Cli, config::SiteConfig, log};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = match SiteConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            log!("error"; "{:#}", e);
            std::process::exit(1);
        }
    };

    sitecfg::cli::run(&cli.command, &config)
}
