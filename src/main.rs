//! folio - content config and section resolver for a personal portfolio site.

mod cli;
mod config;
mod logger;
mod section;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(SiteConfig::load(cli)?);
    debug!("config"; "loaded {}", config.config_path.display());

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&config, name.is_some(), *dry),
        Commands::Check => cli::check::check_site(&config),
        Commands::Sections { args } => cli::sections::run_sections(args, &config),
    }
}
