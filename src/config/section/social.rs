//! `[social]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [social]
//! email = "bixvongoeler@gmail.com"
//! linkedin = "https://www.linkedin.com/in/bix-von-goeler-60ba5b236/"
//! github = "https://github.com/bixvongoeler"
//! ```

use crate::config::ConfigDiagnostics;
use crate::config::util::check_http_url;
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Contact and profile links shown in the header and footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "social")]
pub struct SocialConfig {
    /// Contact email address.
    #[config(inline_doc)]
    pub email: Option<String>,

    /// LinkedIn profile URL.
    #[config(inline_doc)]
    pub linkedin: Option<String>,

    /// GitHub profile URL, also used to build project repository links.
    #[config(inline_doc)]
    pub github: Option<String>,
}

impl SocialConfig {
    /// Validate social links.
    ///
    /// # Checks
    /// - `email` must look like `local@domain.tld`
    /// - `linkedin` and `github` must be absolute http(s) URLs
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
        });

        if let Some(email) = &self.email
            && !RE_EMAIL.is_match(email)
        {
            diag.error_with_hint(
                Self::FIELDS.email,
                format!("'{}' is not a valid email address", email),
                "use format like name@example.com",
            );
        }

        if let Some(url) = &self.linkedin {
            check_http_url(url, Self::FIELDS.linkedin, diag);
        }
        if let Some(url) = &self.github {
            check_http_url(url, Self::FIELDS.github, diag);
        }
    }

    /// Repository URL for a project hosted under the configured GitHub profile.
    pub fn repo_url(&self, repo: &str) -> Option<String> {
        let github = self.github.as_deref()?;
        Some(format!("{}/{}", github.trim_end_matches('/'), repo))
    }
}
