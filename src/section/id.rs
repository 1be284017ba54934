//! The closed set of section ids.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A top-level portfolio section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Education,
    Experience,
    Skills,
    Projects,
    Hobbies,
}

/// Returned when parsing an id outside [`SectionId::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section id '{0}'")]
pub struct UnknownSectionId(pub String);

impl SectionId {
    /// Every known id, in default display order.
    pub const ALL: [Self; 6] = [
        Self::About,
        Self::Education,
        Self::Experience,
        Self::Skills,
        Self::Projects,
        Self::Hobbies,
    ];

    /// Order used when `layout.sections` is absent or empty.
    pub const DEFAULT_ORDER: [Self; 6] = Self::ALL;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Hobbies => "hobbies",
        }
    }

    /// Display label for the section heading and navigation.
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Hobbies => "Hobbies",
        }
    }

    /// Whether the config has anything to show for this section.
    pub fn is_visible(self, config: &SiteConfig) -> bool {
        match self {
            Self::About => !config.profile.about.is_empty(),
            Self::Education => !config.education.is_empty(),
            Self::Experience => !config.experience.is_empty(),
            Self::Skills => !config.skills.categories.is_empty(),
            Self::Projects => !config.projects.is_empty(),
            Self::Hobbies => !config.hobbies.is_empty(),
        }
    }

    /// Known ids joined for messages, e.g. `about, education, ...`.
    pub fn known_list() -> String {
        Self::ALL
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for SectionId {
    type Err = UnknownSectionId;

    /// Case-sensitive: `"About"` is not a known id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSectionId(s.to_string()))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
