//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── content    # [[projects]], [[experience]], [[education]], [[hobbies]]
//! │   ├── layout     # [layout]
//! │   ├── profile    # [profile]
//! │   ├── skills     # [skills]
//! │   ├── social     # [social]
//! │   └── theme      # [theme], [theme.tilt]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   ├── handle     # Global config handle
//! │   └── status     # Field status checks
//! └── mod.rs         # SiteConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

use util::{check_http_url, find_config_file};

pub use section::{
    Education, Experience, Hobby, LayoutConfig, ProfileConfig, Project, SkillsConfig,
    SocialConfig, ThemeConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::IsTerminal,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// `[[projects]]` entries are plain records without a `Config` derive.
const PROJECTS: FieldPath = FieldPath::new("projects");

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Identity and about text
    #[serde(default)]
    pub profile: ProfileConfig,

    /// Contact and profile links
    #[serde(default)]
    pub social: SocialConfig,

    /// Colors and card effects
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Section display order
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Categorized skills
    #[serde(default)]
    pub skills: SkillsConfig,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub experience: Vec<Experience>,

    #[serde(default)]
    pub education: Vec<Education>,

    #[serde(default)]
    pub hobbies: Vec<Hobby>,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        Self::load_with(cli, UnknownFields::Ask)
    }

    /// Load again for `--watch`; unknown fields are reported but never
    /// prompted for, since the watch loop owns the terminal.
    pub fn reload(cli: &'static Cli) -> Result<Self> {
        Self::load_with(cli, UnknownFields::Warn)
    }

    fn load_with(cli: &'static Cli, unknown: UnknownFields) -> Result<Self> {
        let location = Location::resolve(cli)?;

        if cli.is_init() {
            return Ok(Self {
                cli: Some(cli),
                config_path: location.config_path,
                root: location.root,
                ..Self::default()
            });
        }

        if !location.exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'folio init' to create a new site.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let mut config = Self::from_path(&location.config_path, unknown)?;
        config.cli = Some(cli);
        config.config_path = location.config_path;
        config.root = location.root;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path, unknown: UnknownFields) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if unknown.asks(std::io::stdin().is_terminal()) && !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, printing hints and warnings.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let allow_experimental = self.cli.is_some_and(|cli| cli.allow_experimental);
        let diag = self.diagnostics(allow_experimental);

        diag.print_advisories();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every check without printing anything.
    pub fn diagnostics(&self, allow_experimental: bool) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::with_allow_experimental(allow_experimental);

        // Field status (experimental, deprecated)
        self.theme.tilt.validate_field_status(&mut diag);
        self.skills.validate_field_status(&mut diag);

        self.profile.validate(&mut diag);
        self.social.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.layout.validate(&mut diag);
        self.validate_projects(&mut diag);

        diag
    }

    /// Check project links and cross-references to skills and social links.
    fn validate_projects(&self, diag: &mut ConfigDiagnostics) {
        for (i, project) in self.projects.iter().enumerate() {
            if let Some(link) = &project.link {
                check_http_url(link, PROJECTS.item(i, "link"), diag);
            }

            if let Some(repo) = &project.repo
                && self.social.repo_url(repo).is_none()
            {
                diag.note(
                    PROJECTS.item(i, "repo"),
                    format!(
                        "'{}' has no repository link without {}",
                        repo,
                        SocialConfig::FIELDS.github
                    ),
                );
            }

            if self.skills.categories.is_empty() {
                continue;
            }
            for skill in &project.skills {
                if !self.skills.contains(skill) {
                    diag.note(
                        PROJECTS.item(i, "skills"),
                        format!("'{}' is not listed in any skill category", skill),
                    );
                }
            }
        }
    }
}

/// What to do after warning about unknown config fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnknownFields {
    /// Ask whether to continue (startup).
    Ask,
    /// Only warn (watch reloads).
    Warn,
}

impl UnknownFields {
    const fn asks(self, stdin_is_terminal: bool) -> bool {
        matches!(self, Self::Ask) && stdin_is_terminal
    }
}

/// Where the config file is, and the site root it belongs to.
struct Location {
    config_path: PathBuf,
    root: PathBuf,
    exists: bool,
}

impl Location {
    /// `init` targets `cwd[/name]`; every other command searches upward
    /// from the cwd and roots the site at the config's directory.
    fn resolve(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        if let Commands::Init { name, .. } = &cli.command {
            let root = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
            let config_path = root.join(&cli.config);
            return Ok(Self {
                exists: config_path.exists(),
                config_path,
                root,
            });
        }

        Ok(match find_config_file(&cli.config) {
            Some(config_path) => Self {
                root: config_path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default(),
                config_path,
                exists: true,
            },
            None => Self {
                config_path: cwd.join(&cli.config),
                root: cwd,
                exists: false,
            },
        })
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[profile]` (`name = "Test"`).
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[profile]\nname = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Level;

    #[test]
    fn test_only_startup_asks_about_unknown_fields() {
        assert!(UnknownFields::Ask.asks(true));
        assert!(!UnknownFields::Ask.asks(false));
        assert!(!UnknownFields::Warn.asks(true));
    }

    #[test]
    fn test_reload_never_blocks_on_unknown_fields() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[profile]\nname = \"Bix\"\nnickname = \"B\"").unwrap();

        let config = SiteConfig::from_path(&path, UnknownFields::Warn).unwrap();
        assert_eq!(config.profile.name, "Bix");
    }

    #[test]
    fn test_init_location_under_named_dir() {
        use clap::Parser;

        let cli = Cli::try_parse_from(["folio", "init", "portfolio", "-C", "site.toml"]).unwrap();
        let location = Location::resolve(&cli).unwrap();
        let cwd = std::env::current_dir().unwrap();

        assert_eq!(location.root, cwd.join("portfolio"));
        assert_eq!(location.config_path, cwd.join("portfolio").join("site.toml"));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[profile\nname = \"Bix\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.profile.name, "");
        assert_eq!(config.theme.accent, "#007A6A");
        assert!(config.layout.sections.is_none());
        assert!(config.projects.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[profile]\nname = \"Bix\"\nnickname = \"B\"\n[blog]\nenable = true";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.profile.name, "Bix");
        assert!(ignored.iter().any(|f| f.contains("nickname")));
        assert!(ignored.iter().any(|f| f.contains("blog")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[profile]\nname = \"Bix\"\n[[hobbies]]\nname = \"Music\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_diagnostics_clean_config() {
        let config = test_parse_config(
            r#"
[social]
github = "https://github.com/bix"

[skills.categories]
frameworks = ["React"]

[[projects]]
name = "ExtensionKit"
link = "https://extensionkit.io"
repo = "extension-kit"
skills = ["React"]
"#,
        );
        let diag = config.diagnostics(false);
        for level in [Level::Error, Level::Warning, Level::Experimental, Level::Note] {
            assert!(diag.at(level).is_empty(), "unexpected {level:?}");
        }
    }

    #[test]
    fn test_project_cross_reference_notes() {
        let config = test_parse_config(
            r#"
[skills.categories]
languages = ["Rust"]

[[projects]]
name = "Sketchbook"
repo = "sketchbook"
skills = ["Rust", "Go"]
"#,
        );
        let diag = config.diagnostics(false);

        let notes = diag.at(Level::Note);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].field, "projects[0].repo");
        assert!(notes[0].message.contains("social.github"));
        assert_eq!(notes[1].field, "projects[0].skills");
        assert!(notes[1].message.contains("'Go'"));
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_project_skills_unchecked_without_categories() {
        let config = test_parse_config(
            "[social]\ngithub = \"https://github.com/bix\"\n[[projects]]\nname = \"Sketchbook\"\nskills = [\"Go\"]",
        );
        assert!(config.diagnostics(false).at(Level::Note).is_empty());
    }

    #[test]
    fn test_diagnostics_collects_all_sections() {
        let config = test_parse_config(
            r#"
[theme]
accent = "green"

[theme.tilt]
max = 5

[layout]
sections = ["about", "blog"]

[skills]
list = ["React"]

[[projects]]
name = "Broken"
link = "extensionkit.io"
"#,
        );
        let diag = config.diagnostics(false);

        assert_eq!(
            diag.fields(Level::Error),
            ["theme.accent", "projects[0].link"]
        );
        assert_eq!(
            diag.fields(Level::Warning),
            ["skills.list", "layout.sections[1]"]
        );
        assert_eq!(diag.fields(Level::Experimental), ["[theme.tilt]"]);
        assert!(config.diagnostics(true).at(Level::Experimental).is_empty());
    }
}
