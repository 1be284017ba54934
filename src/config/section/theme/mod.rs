//! `[theme]` section configuration.
//!
//! Contains accent colors and the card tilt effect.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! accent = "#007A6A"
//! dark_accent = "#00B5A0"
//!
//! [theme.tilt]
//! enable = true
//! max = 3
//! ```

mod tilt;

pub use tilt::TiltConfig;

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Theme section configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeConfig {
    /// Accent color for light mode.
    #[config(default = "#007A6A", inline_doc)]
    pub accent: String,

    /// Accent color for dark mode.
    #[config(default = "#00B5A0", inline_doc)]
    pub dark_accent: String,

    /// Card tilt effect (desktop only).
    #[config(skip)]
    pub tilt: TiltConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#007A6A".into(),
            dark_accent: "#00B5A0".into(),
            tilt: TiltConfig::default(),
        }
    }
}

impl ThemeConfig {
    /// Validate theme colors and the tilt settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_hex_color(&self.accent, Self::FIELDS.accent, diag);
        check_hex_color(&self.dark_accent, Self::FIELDS.dark_accent, diag);
        self.tilt.validate(diag);
    }
}

/// Accepts `#rgb` and `#rrggbb`.
fn check_hex_color(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    static RE_HEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap());

    if !RE_HEX.is_match(value) {
        diag.error_with_hint(
            field,
            format!("'{}' is not a hex color", value),
            "use format like \"#007A6A\" or \"#0a6\"",
        );
    }
}
