//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Portfolio site content config and section resolver
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, global = true, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Do not print hints for experimental config sections
    #[arg(long, global = true)]
    pub allow_experimental: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new folio.toml from template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Validate folio.toml and summarize its sections
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved section list
    #[command(visible_alias = "s")]
    Sections {
        #[command(flatten)]
        args: SectionsArgs,
    },
}

/// Sections command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SectionsArgs {
    /// Include hidden sections (sections whose content is empty)
    #[arg(short, long)]
    pub all: bool,

    /// Output JSON (`[{"id", "label", "isVisible"}]`)
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Keep running and print again whenever the config file changes
    #[arg(short, long)]
    pub watch: bool,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
