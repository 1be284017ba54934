//! Configuration errors and collected diagnostics.

use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// How much a diagnostic matters. Only `Error` fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    /// Deprecated keys, ids that resolve to nothing.
    Warning,
    /// Experimental keys changed from their defaults.
    Experimental,
    /// Content that resolves but probably not as intended.
    Note,
}

impl Level {
    /// Log prefix and heading for the grouped advisory output.
    const fn heading(self) -> (&'static str, &'static str) {
        match self {
            Self::Error => ("error", "invalid config:"),
            Self::Warning => ("warning", "suspicious or deprecated config:"),
            Self::Experimental => ("hint", "experimental, may change or be removed:"),
            Self::Note => ("hint", "content that may not render as intended:"),
        }
    }
}

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub level: Level,
    /// Config key path (e.g., "social.github" or "projects[1].link")
    pub field: String,
    /// Empty for experimental hints, where the path says it all.
    pub message: String,
    /// Fix hint (errors only)
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}{}", "[".dimmed(), self.field.as_str().cyan(), "]".dimmed())?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

/// Everything one validation pass found, in the order it was found.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    entries: Vec<ConfigDiagnostic>,
    /// Suppress experimental feature hints.
    pub allow_experimental: bool,
}

impl ConfigDiagnostics {
    pub fn with_allow_experimental(allow_experimental: bool) -> Self {
        Self {
            allow_experimental,
            ..Self::default()
        }
    }

    pub fn push(&mut self, level: Level, field: impl AsRef<str>, message: impl Into<String>) {
        self.entries.push(ConfigDiagnostic {
            level,
            field: field.as_ref().to_string(),
            message: message.into(),
            hint: None,
        });
    }

    pub fn error(&mut self, field: impl AsRef<str>, message: impl Into<String>) {
        self.push(Level::Error, field, message);
    }

    pub fn error_with_hint(
        &mut self,
        field: impl AsRef<str>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Level::Error, field, message);
        if let Some(last) = self.entries.last_mut() {
            last.hint = Some(hint.into());
        }
    }

    pub fn warn(&mut self, field: impl AsRef<str>, message: impl Into<String>) {
        self.push(Level::Warning, field, message);
    }

    pub fn note(&mut self, field: impl AsRef<str>, message: impl Into<String>) {
        self.push(Level::Note, field, message);
    }

    fn iter_level(&self, level: Level) -> impl Iterator<Item = &ConfigDiagnostic> {
        self.entries.iter().filter(move |d| d.level == level)
    }

    /// Print everything that is not an error, grouped by level.
    pub fn print_advisories(&self) {
        for level in [Level::Warning, Level::Experimental, Level::Note] {
            let mut entries = self.iter_level(level).peekable();
            if entries.peek().is_none() {
                continue;
            }
            let (module, heading) = level.heading();
            crate::log!(module; "{}", heading);
            for d in entries {
                if d.message.is_empty() {
                    eprintln!("- {}", d.field);
                } else {
                    eprintln!("- {}: {}", d.field, d.message);
                }
            }
        }
    }

    #[cfg(test)]
    pub fn at(&self, level: Level) -> Vec<&ConfigDiagnostic> {
        self.iter_level(level).collect()
    }

    #[cfg(test)]
    pub fn fields(&self, level: Level) -> Vec<&str> {
        self.iter_level(level).map(|d| d.field.as_str()).collect()
    }

    /// `Err(self)` when any entry is an error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.iter_level(Level::Error).next().is_none() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Renders the errors only; advisories go through `print_advisories`.
impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        let errors: Vec<_> = self.iter_level(Level::Error).collect();
        for (i, err) in errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
