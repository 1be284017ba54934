//! Config file watching for `folio sections --watch`.
//!
//! ```text
//! notify callback ──mpsc──► debounce (300ms) ──► reload_config ──► on_reload
//!                                                   │ error
//!                                                   └──► status line, old config kept
//! ```
//!
//! The parent directory is watched rather than the file itself, because many
//! editors save by writing a temp file and renaming it over the original.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use notify::{EventKind, RecursiveMode, Watcher};

use crate::config::{SiteConfig, cfg, reload_config};
use crate::logger::{Status, watch_detach, watch_status};
use crate::{debug, log};

const DEBOUNCE: Duration = Duration::from_millis(300);
const POLL: Duration = Duration::from_millis(100);

/// Has shutdown been requested? (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::SeqCst)
}

fn setup_shutdown_handler() -> Result<()> {
    ctrlc::set_handler(|| SHUTDOWN.store(true, Ordering::SeqCst))
        .map_err(|e| anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Block until Ctrl+C, calling `on_reload` with each successfully reloaded config.
pub fn watch_config<F>(mut on_reload: F) -> Result<()>
where
    F: FnMut(&SiteConfig) -> Result<()>,
{
    setup_shutdown_handler()?;

    let config_path = cfg().config_path.clone();
    let dir = config_path
        .parent()
        .context("config file has no parent directory")?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let _ = tx.send(res);
    })?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;

    log!("watch"; "watching {} (Ctrl+C to stop)", config_path.display());

    let mut pending: Option<Instant> = None;
    while !is_shutdown() {
        match rx.recv_timeout(POLL) {
            Ok(Ok(event)) => {
                if is_config_change(&event, &config_path) {
                    debug!("watch"; "raw notify: {:?} {:?}", event.kind, event.paths);
                    pending = Some(Instant::now());
                }
            }
            Ok(Err(e)) => log!("watch"; "notify error: {}", e),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if pending.is_some_and(|at| at.elapsed() >= DEBOUNCE) {
            pending = None;
            reload(&mut on_reload);
        }
    }

    log!("watch"; "stopped");
    Ok(())
}

fn reload<F>(on_reload: &mut F)
where
    F: FnMut(&SiteConfig) -> Result<()>,
{
    match reload_config() {
        Ok(true) => {
            watch_detach();
            match on_reload(&cfg()) {
                Ok(()) => watch_status(Status::Reloaded),
                Err(e) => watch_status(Status::OutputFailed(&format!("{e:#}"))),
            }
        }
        Ok(false) => watch_status(Status::Unchanged),
        Err(e) => watch_status(Status::Rejected(&format!("{e:#}"))),
    }
}

/// Content change (not metadata noise) touching the config file.
fn is_config_change(event: &notify::Event, config_path: &Path) -> bool {
    let relevant = match event.kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        EventKind::Modify(modify) => !matches!(modify, notify::event::ModifyKind::Metadata(_)),
        _ => false,
    };
    relevant
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == config_path.file_name())
}
