//! The process-wide `SiteConfig`, replaced wholesale on `--watch` reloads.
//!
//! The config and the hash of the file it came from live in one snapshot,
//! so readers never see a config paired with another file's hash.

use crate::config::SiteConfig;
use crate::utils::hash;
use anyhow::{Context, Result, anyhow};
use arc_swap::ArcSwap;
use std::fs;
use std::sync::{Arc, LazyLock};

struct Snapshot {
    config: Arc<SiteConfig>,
    /// FxHash of the file content `config` was loaded from.
    source_hash: u64,
}

static CURRENT: LazyLock<ArcSwap<Snapshot>> = LazyLock::new(|| {
    ArcSwap::from_pointee(Snapshot {
        config: Arc::default(),
        source_hash: 0,
    })
});

pub fn cfg() -> Arc<SiteConfig> {
    Arc::clone(&CURRENT.load().config)
}

/// Install the config loaded at startup.
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let source_hash = fs::read_to_string(&config.config_path)
        .map(|content| hash::compute(content.as_bytes()))
        .unwrap_or(0);
    install(config, source_hash)
}

/// Re-read the config file and swap in a new config if its content changed.
///
/// Returns `Ok(false)` when the content is unchanged. On error the current
/// config stays active.
pub fn reload_config() -> Result<bool> {
    let current = cfg();
    let cli = current
        .cli
        .ok_or_else(|| anyhow!("config reloaded before CLI initialization"))?;

    let content = fs::read_to_string(&current.config_path)
        .with_context(|| format!("failed to read {}", current.config_path.display()))?;

    swap_if_changed(&content, || SiteConfig::reload(cli))
}

fn swap_if_changed(content: &str, load: impl FnOnce() -> Result<SiteConfig>) -> Result<bool> {
    let source_hash = hash::compute(content.as_bytes());
    if source_hash == CURRENT.load().source_hash {
        return Ok(false);
    }

    install(load()?, source_hash);
    Ok(true)
}

fn install(config: SiteConfig, source_hash: u64) -> Arc<SiteConfig> {
    let config = Arc::new(config);
    CURRENT.store(Arc::new(Snapshot {
        config: Arc::clone(&config),
        source_hash,
    }));
    config
}
