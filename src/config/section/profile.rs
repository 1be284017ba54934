//! `[profile]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [profile]
//! name = "Bix"
//! full_name = "William Bix von Goeler"
//! pronouns = "he/him"
//! photo = "/profile.jpeg"
//! greeting = "Hey there, 👋"
//! title = "Software Engineer"
//! description = "portfolio website of William Bix von Goeler"
//! about = """
//! I'm a Junior studying CS at Tufts University...
//! """
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Who the portfolio is about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "profile")]
pub struct ProfileConfig {
    /// Short display name.
    #[config(inline_doc)]
    pub name: String,

    /// Full legal or formal name.
    #[config(inline_doc)]
    pub full_name: String,

    /// Pronouns shown next to the name.
    #[config(inline_doc)]
    pub pronouns: String,

    /// Profile photo path, relative to the site's public root.
    #[config(inline_doc)]
    pub photo: Option<String>,

    /// Greeting line above the headline.
    #[config(inline_doc)]
    pub greeting: String,

    /// Headline, e.g. "Software Engineer".
    #[config(inline_doc)]
    pub title: String,

    /// Page description for search engines.
    #[config(inline_doc)]
    pub description: String,

    /// Free-text "About" paragraph, may contain inline markup.
    /// Leave empty to hide the About section.
    pub about: String,
}

impl ProfileConfig {
    /// Validate profile configuration.
    ///
    /// # Checks
    /// - `name` must not be blank
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "name is empty",
                format!("set {}, e.g.: \"Bix\"", Self::FIELDS.name),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::types::Level;
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_profile_fields() {
        let config = test_parse_config(
            "full_name = \"William Bix von Goeler\"\npronouns = \"he/him\"\nabout = \"hi\"",
        );
        assert_eq!(config.profile.name, "Test");
        assert_eq!(config.profile.full_name, "William Bix von Goeler");
        assert_eq!(config.profile.pronouns, "he/him");
        assert_eq!(config.profile.about, "hi");
        assert!(config.profile.photo.is_none());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut config = test_parse_config("");
        config.profile.name = "   ".into();

        let mut diag = ConfigDiagnostics::default();
        config.profile.validate(&mut diag);
        assert_eq!(diag.fields(Level::Error), ["profile.name"]);
    }
}
