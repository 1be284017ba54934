//! `folio sections`: print the resolved section list.

use std::fs;

use anyhow::{Context, Result};

use crate::cli::SectionsArgs;
use crate::cli::watch::watch_config;
use crate::config::SiteConfig;
use crate::section::{Section, ordered_sections, visible_sections};
use crate::{debug, debug_do, log};

pub fn run_sections(args: &SectionsArgs, config: &SiteConfig) -> Result<()> {
    emit(args, config)?;

    if args.watch {
        watch_config(|config| emit(args, config))?;
    }
    Ok(())
}

/// Resolve, render and write once.
fn emit(args: &SectionsArgs, config: &SiteConfig) -> Result<()> {
    let sections = resolve(args, config);

    debug_do! {
        let hidden = ordered_sections(config).iter().filter(|s| !s.is_visible).count();
        debug!("sections"; "{} resolved, {} hidden", sections.len(), hidden);
    }

    let output = render(&sections, args)?;

    if let Some(ref path) = args.output {
        fs::write(path, &output)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        log!("sections"; "wrote output to {}", path.display());
    } else {
        print!("{}", output);
    }
    Ok(())
}

fn resolve(args: &SectionsArgs, config: &SiteConfig) -> Vec<Section> {
    if args.all {
        ordered_sections(config)
    } else {
        visible_sections(config)
    }
}

/// Render sections as JSON or as an aligned text list, newline terminated.
pub fn render(sections: &[Section], args: &SectionsArgs) -> Result<String> {
    if args.json {
        let mut json = if args.pretty {
            serde_json::to_string_pretty(sections)?
        } else {
            serde_json::to_string(sections)?
        };
        json.push('\n');
        return Ok(json);
    }

    Ok(render_text(sections, args.all))
}

/// One line per section: `1. about       About`, with `(hidden)` appended
/// when hidden sections are shown.
fn render_text(sections: &[Section], mark_hidden: bool) -> String {
    let width = sections
        .iter()
        .map(|s| s.id.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        let mut line = format!(
            "{}. {:<width$}  {}",
            i + 1,
            section.id.as_str(),
            section.label,
        );
        if mark_hidden && !section.is_visible {
            line.push_str(" (hidden)");
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}
