//! `[theme.tilt]` card tilt effect.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Card tilt effect applied on hover (desktop only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.tilt", status = experimental)]
pub struct TiltConfig {
    /// Enable the tilt effect.
    #[config(default = "true", inline_doc)]
    pub enable: bool,

    /// Maximum tilt rotation in degrees.
    #[config(default = "3", inline_doc)]
    pub max: u32,

    /// Transition speed in milliseconds.
    #[config(default = "750", inline_doc)]
    pub speed: u32,

    /// Transform perspective in pixels.
    #[config(default = "3000", inline_doc)]
    pub perspective: u32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            enable: true,
            max: 3,
            speed: 750,
            perspective: 3000,
        }
    }
}

impl TiltConfig {
    const MAX_DEGREES: u32 = 90;

    /// Validate tilt ranges. Skipped when the effect is disabled.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.max > Self::MAX_DEGREES {
            diag.error_with_hint(
                Self::FIELDS.max,
                format!("{} degrees is out of range", self.max),
                format!("use a value between 0 and {}", Self::MAX_DEGREES),
            );
        }
        if self.speed == 0 {
            diag.error(Self::FIELDS.speed, "speed must be greater than 0");
        }
        if self.perspective == 0 {
            diag.error(Self::FIELDS.perspective, "perspective must be greater than 0");
        }
    }
}
