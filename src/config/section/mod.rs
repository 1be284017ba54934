//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module    | TOML Section                 | Purpose                          |
//! |-----------|------------------------------|----------------------------------|
//! | `profile` | `[profile]`                  | Identity, headline, about text   |
//! | `social`  | `[social]`                   | Contact and profile links        |
//! | `theme`   | `[theme]`, `[theme.tilt]`    | Accent colors, card tilt effect  |
//! | `layout`  | `[layout]`                   | Section display order            |
//! | `skills`  | `[skills]`                   | Categorized skills               |
//! | `content` | `[[projects]]`, `[[experience]]`, `[[education]]`, `[[hobbies]]` | Entry lists |

pub mod content;
mod layout;
mod profile;
mod skills;
mod social;
pub mod theme;

pub use content::{Education, Experience, Hobby, Project};
pub use layout::LayoutConfig;
pub use profile::ProfileConfig;
pub use skills::SkillsConfig;
pub use social::SocialConfig;
pub use theme::{ThemeConfig, TiltConfig};
