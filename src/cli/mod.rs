//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod sections;
pub mod watch;

pub use args::{Cli, Commands, SectionsArgs};
