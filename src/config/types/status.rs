//! Reporting for `folio.toml` keys marked experimental or deprecated.
//!
//! `#[derive(Config)]` emits calls to these from `validate_field_status`
//! whenever a marked key differs from its default value.

use super::Level;
use crate::config::ConfigDiagnostics;

/// Status a key or table can be marked with via `#[config(status = ...)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Hint, silenced by `--allow-experimental`.
    Experimental,
    /// Warning; the value is still read but no longer affects sections.
    Deprecated,
}

pub fn check_field_status(field_path: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    report(field_path.to_string(), "key", status, diag);
}

/// Table-level variant, reported once as `[table]`.
pub fn check_section_status(section: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    report(format!("[{section}]"), "table", status, diag);
}

fn report(path: String, kind: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    match status {
        FieldStatus::Experimental if diag.allow_experimental => {}
        FieldStatus::Experimental => diag.push(Level::Experimental, path, ""),
        FieldStatus::Deprecated => diag.push(
            Level::Warning,
            path,
            format!("deprecated {kind}, it no longer changes which sections are shown"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experimental_table_hint() {
        let mut diag = ConfigDiagnostics::default();
        check_section_status("theme.tilt", FieldStatus::Experimental, &mut diag);
        assert_eq!(diag.fields(Level::Experimental), ["[theme.tilt]"]);
        assert!(diag.at(Level::Error).is_empty());
    }

    #[test]
    fn test_experimental_suppressed() {
        let mut diag = ConfigDiagnostics::with_allow_experimental(true);
        check_section_status("theme.tilt", FieldStatus::Experimental, &mut diag);
        check_field_status("theme.tilt.max", FieldStatus::Experimental, &mut diag);
        assert!(diag.at(Level::Experimental).is_empty());
    }

    #[test]
    fn test_deprecated_key_warns() {
        let mut diag = ConfigDiagnostics::default();
        check_field_status("skills.list", FieldStatus::Deprecated, &mut diag);

        let warnings = diag.at(Level::Warning);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "skills.list");
        assert!(warnings[0].message.starts_with("deprecated key"));
        assert!(diag.at(Level::Error).is_empty());
    }

    #[test]
    fn test_deprecated_table_named_with_brackets() {
        let mut diag = ConfigDiagnostics::default();
        check_section_status("skills", FieldStatus::Deprecated, &mut diag);
        let warnings = diag.at(Level::Warning);
        assert_eq!(warnings[0].field, "[skills]");
        assert!(warnings[0].message.starts_with("deprecated table"));
    }
}
