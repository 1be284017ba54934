//! `[layout]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [layout]
//! sections = ["about", "experience", "projects", "skills"]
//! ```
//!
//! Ids outside the known set are ignored when sections are resolved;
//! `folio check` reports them.

use crate::config::ConfigDiagnostics;
use crate::section::SectionId;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Top-level section ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "layout")]
pub struct LayoutConfig {
    /// Display order of sections. Omit (or leave empty) for the default order.
    #[config(default = "[\"about\", \"education\", \"experience\", \"skills\", \"projects\", \"hobbies\"]")]
    pub sections: Option<Vec<String>>,
}

impl LayoutConfig {
    /// The configured ordering, or `None` when absent or empty.
    pub fn ordering(&self) -> Option<&[String]> {
        self.sections.as_deref().filter(|ids| !ids.is_empty())
    }

    /// Warn about ids that resolve to nothing or render twice.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(ids) = self.ordering() else {
            return;
        };

        let mut seen = FxHashSet::default();
        for (i, id) in ids.iter().enumerate() {
            let field = Self::FIELDS.sections.at(i);
            match id.parse::<SectionId>() {
                Err(e) => diag.warn(
                    field,
                    format!(
                        "{}, it will be ignored (known: {})",
                        e,
                        SectionId::known_list()
                    ),
                ),
                Ok(section) if !seen.insert(section) => diag.warn(
                    field,
                    format!("'{}' is listed more than once and will be rendered twice", id),
                ),
                Ok(_) => {}
            }
        }
    }
}
