//! Site initialization module.
//!
//! - [`validate`]: Where init may write
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::fs;

use validate::InitMode;

/// Create a new site config
///
/// # Steps
/// 1. Validate target directory
/// 2. Create it if needed
/// 3. Write `folio.toml` and `.gitignore`
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = InitMode::for_name(has_name);

    if let Err(e) = validate::validate_target(root, &site_config.config_path, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    let config_path = config::write_config(root, &site_config.config_path)?;
    config::write_ignore_files(root)?;

    log!("init"; "wrote {}", config_path.display());
    log!("init"; "fill in [profile] and run 'folio check'");
    Ok(())
}
