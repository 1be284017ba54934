//! Where `folio init` may write.

use anyhow::{Result, bail};
use std::path::Path;

/// `folio init` targets either the current directory or a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `folio init`: add a config next to an existing renderer project
    CurrentDir,
    /// `folio init <name>`: start a fresh directory
    NewDir,
}

impl InitMode {
    pub const fn for_name(has_name: bool) -> Self {
        if has_name { Self::NewDir } else { Self::CurrentDir }
    }
}

/// Refuse to overwrite an existing portfolio config.
///
/// A non-empty current directory is fine: the renderer usually lives there
/// already. A named directory must not exist yet.
pub fn validate_target(root: &Path, config_path: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::NewDir if root.exists() => bail!(
            "'{}' already exists.\nPick another name, or run `folio init` inside it.",
            root.display()
        ),
        InitMode::CurrentDir if config_path.exists() => bail!(
            "'{}' already exists.\nEdit it and run `folio check` instead.",
            config_path.display()
        ),
        InitMode::CurrentDir if root.is_file() => {
            bail!("'{}' is a file, not a directory.", root.display())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_current_dir_with_renderer_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        let config = temp.path().join("folio.toml");
        assert!(validate_target(temp.path(), &config, InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_current_dir_with_existing_config() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("folio.toml");
        fs::write(&config, "[profile]\nname = \"Bix\"").unwrap();

        let err = validate_target(temp.path(), &config, InitMode::CurrentDir).unwrap_err();
        assert!(err.to_string().contains("folio check"));
    }

    #[test]
    fn test_custom_config_name_checked() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("folio.toml"), "").unwrap();
        let custom = temp.path().join("portfolio.toml");
        assert!(validate_target(temp.path(), &custom, InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_new_dir_must_not_exist() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("folio.toml");
        assert!(validate_target(temp.path(), &config, InitMode::NewDir).is_err());

        let fresh = temp.path().join("portfolio");
        let config = fresh.join("folio.toml");
        assert!(validate_target(&fresh, &config, InitMode::NewDir).is_ok());
    }

    #[test]
    fn test_mode_from_name() {
        assert_eq!(InitMode::for_name(true), InitMode::NewDir);
        assert_eq!(InitMode::for_name(false), InitMode::CurrentDir);
    }
}
