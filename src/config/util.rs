//! Configuration utility functions.

use crate::config::ConfigDiagnostics;
use std::path::{Path, PathBuf};

/// Report an error unless `url_str` is an absolute http(s) URL with a host.
///
/// Uses `url` crate for strict parsing, so `github.com/user` (no scheme)
/// and `ftp://...` are both rejected.
pub fn check_http_url(url_str: &str, field: impl AsRef<str>, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{}': {}", url_str, e),
                "use format like https://example.com",
            );
        }
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/src/components/  ← cwd
/// /home/user/site/folio.toml       ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Level;
    use std::fs;
    use tempfile::TempDir;

    fn errors_for(url: &str) -> Vec<String> {
        let mut diag = ConfigDiagnostics::default();
        check_http_url(url, "social.github", &mut diag);
        diag.at(Level::Error).iter().map(|e| e.message.clone()).collect()
    }

    #[test]
    fn test_check_http_url_accepts() {
        assert!(errors_for("https://github.com/bixvongoeler").is_empty());
        assert!(errors_for("http://localhost:8080/path").is_empty());
        assert!(errors_for("https://aidevroundup.com/?ref=devportfolio").is_empty());
    }

    #[test]
    fn test_check_http_url_rejects() {
        assert!(errors_for("github.com/bix")[0].contains("invalid URL"));
        assert!(errors_for("ftp://example.com")[0].contains("scheme 'ftp'"));
        assert!(errors_for("mailto:bix@example.com")[0].contains("scheme 'mailto'"));
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src/components");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("folio.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("folio.toml")).unwrap();
        assert_eq!(found, temp.path().join("folio.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file_from(temp.path(), Path::new("no-such-config.toml")).is_none());
        assert!(
            find_config_file_from(temp.path(), &temp.path().join("absent.toml")).is_none()
        );
    }
}
