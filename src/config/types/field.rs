//! Paths naming a `folio.toml` key in diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a `folio.toml` key, e.g. `theme.tilt.max`.
///
/// `#[derive(Config)]` emits one constant per field (`ThemeConfig::FIELDS.accent`).
/// Array entries are addressed with [`FieldPath::at`] and [`FieldPath::item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// `layout.sections` at 1 is `layout.sections[1]`.
    pub fn at(self, index: usize) -> String {
        format!("{}[{index}]", self.0)
    }

    /// `projects` at 2 with key `link` is `projects[2].link`.
    pub fn item(self, index: usize, key: &str) -> String {
        format!("{}[{index}].{key}", self.0)
    }
}

/// Renders as `` `path` `` for use inside messages.
impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.0.cyan())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
