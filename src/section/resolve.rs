//! Ordering and visibility resolution.

use super::SectionId;
use crate::config::SiteConfig;
use serde::Serialize;

/// A resolved section, built fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
    pub is_visible: bool,
}

impl Section {
    fn resolve(id: SectionId, config: &SiteConfig) -> Self {
        Self {
            id,
            label: id.label(),
            is_visible: id.is_visible(config),
        }
    }
}

/// Sections in display order, each annotated with its visibility.
///
/// Uses `layout.sections` when present and non-empty, otherwise
/// [`SectionId::DEFAULT_ORDER`]. Unknown ids are dropped without error;
/// duplicates are kept.
pub fn ordered_sections(config: &SiteConfig) -> Vec<Section> {
    match config.layout.ordering() {
        Some(ids) => ids
            .iter()
            .filter_map(|id| id.parse::<SectionId>().ok())
            .map(|id| Section::resolve(id, config))
            .collect(),
        None => SectionId::DEFAULT_ORDER
            .into_iter()
            .map(|id| Section::resolve(id, config))
            .collect(),
    }
}

/// [`ordered_sections`] without the hidden ones.
pub fn visible_sections(config: &SiteConfig) -> Vec<Section> {
    ordered_sections(config)
        .into_iter()
        .filter(|section| section.is_visible)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Education, Experience, Hobby, Project, test_parse_config};

    fn ids(sections: &[Section]) -> Vec<SectionId> {
        sections.iter().map(|s| s.id).collect()
    }

    fn populated() -> SiteConfig {
        let mut config = test_parse_config("about = \"hi\"\n[skills.categories]\nlanguages = [\"X\"]");
        config.projects.push(Project::default());
        config.experience.push(Experience::default());
        config.education.push(Education::default());
        config.hobbies.push(Hobby::default());
        config
    }

    fn with_ordering(mut config: SiteConfig, ordering: &[&str]) -> SiteConfig {
        config.layout.sections = Some(ordering.iter().map(|s| s.to_string()).collect());
        config
    }

    #[test]
    fn test_unknown_id_dropped_order_preserved() {
        let config = test_parse_config(
            "about = \"hi\"\n[layout]\nsections = [\"skills\", \"unknownId\", \"about\"]\n[skills.categories]\nlanguages = [\"X\"]",
        );

        assert_eq!(
            ordered_sections(&config),
            [
                Section {
                    id: SectionId::Skills,
                    label: "Skills",
                    is_visible: true,
                },
                Section {
                    id: SectionId::About,
                    label: "About",
                    is_visible: true,
                },
            ]
        );
    }

    #[test]
    fn test_default_order_with_empty_education() {
        let mut config = populated();
        config.education.clear();

        let sections = ordered_sections(&config);
        assert_eq!(ids(&sections), SectionId::DEFAULT_ORDER);
        for section in &sections {
            assert_eq!(section.is_visible, section.id != SectionId::Education);
        }
        assert!(!ids(&visible_sections(&config)).contains(&SectionId::Education));
    }

    #[test]
    fn test_empty_ordering_uses_default() {
        let config = with_ordering(populated(), &[]);
        assert_eq!(ids(&ordered_sections(&config)), SectionId::DEFAULT_ORDER);
    }

    #[test]
    fn test_only_unknown_ids_yields_nothing() {
        let config = with_ordering(populated(), &["blog", "About", "contact"]);
        assert!(ordered_sections(&config).is_empty());
        assert!(visible_sections(&config).is_empty());
    }

    #[test]
    fn test_duplicates_kept() {
        let config = with_ordering(populated(), &["projects", "about", "projects"]);
        assert_eq!(
            ids(&ordered_sections(&config)),
            [SectionId::Projects, SectionId::About, SectionId::Projects]
        );
    }

    #[test]
    fn test_partial_ordering_omits_unlisted() {
        let config = with_ordering(populated(), &["hobbies", "experience"]);
        assert_eq!(
            ids(&ordered_sections(&config)),
            [SectionId::Hobbies, SectionId::Experience]
        );
    }

    #[test]
    fn test_visible_is_filtered_ordered() {
        let mut config = with_ordering(
            populated(),
            &["projects", "nope", "education", "about", "hobbies", "skills"],
        );
        config.education.clear();
        config.hobbies.clear();

        let ordered = ordered_sections(&config);
        let visible = visible_sections(&config);

        let expected: Vec<_> = ordered.iter().copied().filter(|s| s.is_visible).collect();
        assert_eq!(visible, expected);
        assert_eq!(
            ids(&visible),
            [SectionId::Projects, SectionId::About, SectionId::Skills]
        );
    }

    #[test]
    fn test_idempotent() {
        let config = with_ordering(populated(), &["skills", "about", "x"]);
        assert_eq!(ordered_sections(&config), ordered_sections(&config));
        assert_eq!(visible_sections(&config), visible_sections(&config));
    }

    #[test]
    fn test_every_ordering_stays_in_known_set() {
        let orderings: [&[&str]; 4] = [
            &["", "ABOUT", "skills "],
            &["hobbies", "hobbies", "hobbies"],
            &["projects", "experience", "education", "about", "skills", "hobbies"],
            &["🎸", "skills"],
        ];
        for ordering in orderings {
            let config = with_ordering(populated(), ordering);
            let sections = ordered_sections(&config);
            assert!(sections.len() <= ordering.len());
            for section in sections {
                assert!(SectionId::ALL.contains(&section.id));
                assert_eq!(section.label, section.id.label());
            }
        }
    }

    #[test]
    fn test_json_shape() {
        let config = test_parse_config("[layout]\nsections = [\"education\"]");
        let json = serde_json::to_string(&ordered_sections(&config)).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"education","label":"Education","isVisible":false}]"#
        );
    }
}
