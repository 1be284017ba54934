//! Entry lists: `[[projects]]`, `[[experience]]`, `[[education]]`, `[[hobbies]]`.
//!
//! # Example
//!
//! ```toml
//! [[projects]]
//! name = "ExtensionKit"
//! description = "Kit to jump-start your Chrome extension projects"
//! link = "https://extensionkit.io"
//! repo = "extension-kit"
//! skills = ["React", "Node.js"]
//!
//! [[experience]]
//! company = "Tech Company"
//! title = "Senior Software Engineer"
//! date_range = "Jan 2022 - Present"
//! current = true
//! bullets = ["Led development of microservices architecture"]
//!
//! [[education]]
//! school = "University Name"
//! degree = "Bachelor of Science in Computer Science"
//! date_range = "2014 - 2018"
//! achievements = ["Dean's List all semesters"]
//!
//! [[hobbies]]
//! name = "Music"
//! description = ["Guitar and piano player"]
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Public project URL.
    pub link: Option<String>,
    /// Repository name under `social.github`.
    pub repo: Option<String>,
    /// Skills used, ideally drawn from `[skills.categories]`.
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub date_range: String,
    /// Still in this position.
    pub current: bool,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub date_range: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hobby {
    pub name: String,
    /// One line per bullet.
    pub description: Vec<String>,
}

/// Commented `[[...]]` examples for the generated `folio.toml`.
///
/// Array-of-tables entries carry no defaults, so they are written out by hand
/// instead of coming from `#[derive(Config)]`.
pub const TEMPLATE: &str = r#"# Projects, experience, education and hobbies are lists of entries.
# A list with no entries hides its section.

# [[projects]]
# name = "ExtensionKit"
# description = "Kit to jump-start your Chrome extension projects"
# link = "https://extensionkit.io"
# repo = "extension-kit"  # repository name under social.github
# skills = ["React", "Node.js"]

# [[experience]]
# company = "Tech Company"
# title = "Senior Software Engineer"
# date_range = "Jan 2022 - Present"
# current = true
# bullets = ["Led development of microservices architecture serving 1M+ users"]

# [[education]]
# school = "University Name"
# degree = "Bachelor of Science in Computer Science"
# date_range = "2014 - 2018"
# achievements = ["Dean's List all semesters"]

# [[hobbies]]
# name = "Music"
# description = ["Guitar and piano player", "Home studio recording and production"]
"#;
