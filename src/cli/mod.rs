//! CLI layer for vault-widget.
//!
//! Provides the command-line host using clap: rendering the widget,
//! formatting notes directly, and managing bookmarks.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{BookmarkCommands, Cli, Commands};
