//! Configuration file generation.
//!
//! Builds the commented `folio.toml` written by `folio init`.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::section::{
    LayoutConfig, ProfileConfig, SkillsConfig, SocialConfig, ThemeConfig, TiltConfig, content,
};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Sample categories appended after the generated `[skills]` section.
const SKILL_CATEGORIES_TEMPLATE: &str = r#"# Category name to skill names, shown in the order written.
# An empty table hides the Skills section.
# [skills.categories]
# languages = ["Rust", "TypeScript", "Python"]
# tools = ["Docker", "Git"]
"#;

/// Generate folio.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# folio configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    for section in [
        ProfileConfig::template_with_header(),
        SocialConfig::template_with_header(),
        ThemeConfig::template_with_header(),
        TiltConfig::template_with_header(),
        LayoutConfig::template_with_header(),
        SkillsConfig::template_with_header(),
    ] {
        out.push_str(&section);
        out.push_str("\n\n");
    }

    out.push_str(SKILL_CATEGORIES_TEMPLATE);
    out.push('\n');
    out.push_str(content::TEMPLATE);

    out
}

/// Write default folio.toml, `config_path` is the full target path
/// (`<root>/<--config>`). Falls back to `<root>/folio.toml`.
pub fn write_config(root: &Path, config_path: &Path) -> Result<PathBuf> {
    let content = generate_config_template();

    let path = if config_path.as_os_str().is_empty() {
        root.join("folio.toml")
    } else {
        config_path.to_path_buf()
    };

    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}

/// Write `.gitignore` with the renderer's usual output patterns.
///
/// Existing ignore files are left untouched.
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let content = ["/dist/", "/node_modules/", ".DS_Store"].join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }
    Ok(())
}
