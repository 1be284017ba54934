//! Terminal output that is not section output.
//!
//! `folio sections` owns stdout so its text or JSON can be piped; every
//! message here goes to stderr.
//!
//! ```ignore
//! log!("check"; "{} sections, {} visible", total, visible);
//! debug!("watch"; "raw notify: {:?}", event.kind);
//! watch_status(Status::Reloaded);
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Style};
use parking_lot::Mutex;
use std::{
    fmt,
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print `[module] message` to stderr.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {
        $crate::logger::log($module, format_args!($($arg)*))
    };
}

/// `log!` that only prints with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, format_args!($($arg)*))
        }
    };
}

/// Run a block only with `--verbose`, for debug output that costs something to build.
#[macro_export]
macro_rules! debug_do {
    ($($body:tt)*) => {
        if $crate::logger::is_verbose() {
            $($body)*
        }
    };
}

pub fn log(module: &str, message: fmt::Arguments<'_>) {
    let prefix = format!("[{module}]");
    let mut err = stderr().lock();
    execute!(err, Clear(ClearType::UntilNewLine)).ok();
    writeln!(err, "{} {message}", prefix.style(prefix_style(module))).ok();
}

fn prefix_style(module: &str) -> Style {
    let style = Style::new().bold();
    match module.to_ascii_lowercase().as_str() {
        "error" => style.bright_red(),
        "warning" => style.bright_yellow(),
        "hint" => style.bright_cyan(),
        "watch" => style.bright_green(),
        "check" | "init" | "sections" => style.bright_blue(),
        _ => style.bright_magenta(),
    }
}

// ============================================================================
// watch status line
// ============================================================================

/// Outcome of one `--watch` reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<'a> {
    Reloaded,
    Unchanged,
    /// New config is active but printing the sections failed.
    OutputFailed(&'a str),
    /// New config was rejected; the previous one is still active.
    Rejected(&'a str),
}

impl Status<'_> {
    fn text(&self) -> String {
        match self {
            Self::Reloaded => format!("{} reloaded config", "✓".green()),
            Self::Unchanged => "config unchanged".dimmed().to_string(),
            Self::OutputFailed(detail) => {
                format!("{} config reloaded, output failed\n{detail}", "✗".red())
            }
            Self::Rejected(detail) => {
                format!("{} reload failed, keeping previous config\n{detail}", "✗".red())
            }
        }
    }
}

/// Lines the last status occupies, so the next one can replace it.
static STATUS_LINES: Mutex<usize> = parking_lot::const_mutex(0);

/// Replace the previous status with `status`.
pub fn watch_status(status: Status<'_>) {
    let line = format!("{} {}", format!("[{}]", clock(SystemTime::now())).dimmed(), status.text());

    let mut last = STATUS_LINES.lock();
    let mut err = stderr().lock();
    if *last > 0 {
        let up = u16::try_from(*last).unwrap_or(u16::MAX);
        execute!(err, cursor::MoveUp(up), Clear(ClearType::FromCursorDown)).ok();
    }
    writeln!(err, "{line}").ok();
    *last = line.lines().count();
}

/// Keep the current status on screen; sections are about to be printed below it.
pub fn watch_detach() {
    *STATUS_LINES.lock() = 0;
}

/// `HH:MM:SS` in UTC.
fn clock(now: SystemTime) -> String {
    let secs = now.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs());
    format!(
        "{:02}:{:02}:{:02}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}
