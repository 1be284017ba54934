//! `folio check`: validate the config and summarize its sections.
//!
//! Validation itself runs while loading (see `SiteConfig::validate`), so by
//! the time this runs the config is known to be valid.

use crate::config::SiteConfig;
use crate::log;
use crate::section::{Section, SectionId, ordered_sections};
use crate::utils::plural::plural_count;
use anyhow::Result;

/// What `folio check` reports about a valid config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub total: usize,
    pub visible: usize,
    /// Ids that resolve but have no content, in display order.
    pub hidden: Vec<SectionId>,
}

impl CheckSummary {
    pub fn from_sections(sections: &[Section]) -> Self {
        let hidden: Vec<_> = sections
            .iter()
            .filter(|s| !s.is_visible)
            .map(|s| s.id)
            .collect();
        Self {
            total: sections.len(),
            visible: sections.len() - hidden.len(),
            hidden,
        }
    }
}

pub fn check_site(config: &SiteConfig) -> Result<()> {
    let summary = CheckSummary::from_sections(&ordered_sections(config));

    let file = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());

    log!(
        "check";
        "{} is valid: {}, {} visible",
        file,
        plural_count(summary.total, "section"),
        summary.visible
    );

    if !summary.hidden.is_empty() {
        let hidden: Vec<_> = summary.hidden.iter().map(|id| id.as_str()).collect();
        log!("check"; "hidden (no content): {}", hidden.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_summary_default_order() {
        let config = test_parse_config("about = \"hi\"\n[[projects]]\nname = \"ExtensionKit\"");
        let summary = CheckSummary::from_sections(&ordered_sections(&config));

        assert_eq!(summary.total, 6);
        assert_eq!(summary.visible, 2);
        assert_eq!(
            summary.hidden,
            [
                SectionId::Education,
                SectionId::Experience,
                SectionId::Skills,
                SectionId::Hobbies
            ]
        );
    }

    #[test]
    fn test_summary_custom_order() {
        let config = test_parse_config("[layout]\nsections = [\"skills\", \"blog\"]");
        let summary = CheckSummary::from_sections(&ordered_sections(&config));
        assert_eq!(summary.total, 1);
        assert_eq!(summary.visible, 0);
        assert_eq!(summary.hidden, [SectionId::Skills]);
    }
}
