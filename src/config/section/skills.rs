//! `[skills]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [skills.categories]
//! languages = ["JavaScript", "TypeScript", "Python"]
//! frameworks = ["React", "Node.js", "Astro"]
//! tools = ["Docker", "AWS", "Git"]
//! ```
//!
//! Categories keep the order they are written in.

use macros::Config;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Skills section configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "skills")]
pub struct SkillsConfig {
    /// Flat skill list, superseded by `[skills.categories]`.
    #[config(status = deprecated)]
    pub list: Vec<String>,

    /// Category name to skill names.
    #[config(skip)]
    pub categories: SkillCategories,
}

impl SkillsConfig {
    /// Whether any category lists `skill`.
    pub fn contains(&self, skill: &str) -> bool {
        self.categories
            .iter()
            .any(|(_, skills)| skills.iter().any(|s| s == skill))
    }
}

/// Ordered mapping from category name to skill names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCategories(Vec<(String, Vec<String>)>);

impl SkillCategories {
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, skills)| skills.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(name, skills)| (name.as_str(), skills.as_slice()))
    }

    /// Insert a category, replacing the skills of an existing one in place.
    pub fn insert(&mut self, category: impl Into<String>, skills: Vec<String>) {
        let category = category.into();
        match self.0.iter_mut().find(|(name, _)| *name == category) {
            Some((_, existing)) => *existing = skills,
            None => self.0.push((category, skills)),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for SkillCategories {
    fn from_iter<I: IntoIterator<Item = (K, Vec<String>)>>(iter: I) -> Self {
        let mut categories = Self::default();
        for (name, skills) in iter {
            categories.insert(name, skills);
        }
        categories
    }
}

impl Serialize for SkillCategories {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, skills) in &self.0 {
            map.serialize_entry(name, skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillCategories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoriesVisitor;

        impl<'de> Visitor<'de> for CategoriesVisitor {
            type Value = SkillCategories;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a table of skill lists")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = SkillCategories::default();
                while let Some((name, skills)) = access.next_entry::<String, Vec<String>>()? {
                    categories.insert(name, skills);
                }
                Ok(categories)
            }
        }

        deserializer.deserialize_map(CategoriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Level;
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_categories_keep_document_order() {
        let config = test_parse_config(
            "[skills.categories]\ntools = [\"Docker\"]\nlanguages = [\"Rust\", \"SQL\"]\nframeworks = []",
        );
        let names: Vec<_> = config.skills.categories.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["tools", "languages", "frameworks"]);
        assert_eq!(
            config.skills.categories.get("languages"),
            Some(&["Rust".to_string(), "SQL".to_string()][..])
        );
        assert!(config.skills.contains("Docker"));
        assert!(!config.skills.contains("Go"));
    }

    #[test]
    fn test_categories_json_order() {
        let categories: SkillCategories = [
            ("languages", vec!["X".to_string()]),
            ("frameworks", vec![]),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&categories).unwrap();
        assert_eq!(json, r#"{"languages":["X"],"frameworks":[]}"#);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut categories: SkillCategories =
            [("a", vec![]), ("b", vec![])].into_iter().collect();
        categories.insert("a", vec!["Rust".into()]);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories.iter().next().map(|(n, _)| n), Some("a"));
        assert_eq!(categories.get("a").map(<[String]>::len), Some(1));
    }

    #[test]
    fn test_legacy_list_is_deprecated() {
        let config = test_parse_config("[skills]\nlist = [\"React\"]");
        let mut diag = ConfigDiagnostics::default();
        config.skills.validate_field_status(&mut diag);
        assert_eq!(diag.fields(Level::Warning), ["skills.list"]);
    }
}
