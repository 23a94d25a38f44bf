//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vault-widget: show a bookmarked vault note as a home-screen widget.
///
/// Renders the note with task boxes and bullets tidied up, either as a
/// terminal preview or as a JSON widget tree.
#[derive(Parser, Debug)]
#[command(name = "vault-widget")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the bookmark store.
    ///
    /// Defaults to `vault-widget/bookmarks.json` in the user config directory.
    #[arg(short, long, env = "VAULT_WIDGET_BOOKMARKS", global = true)]
    pub bookmarks: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the widget for a bookmarked note.
    Render {
        /// Widget parameter: the bookmark to show (default: `ObsidianBookmark`).
        #[arg(env = "VAULT_WIDGET_PARAMETER")]
        param: Option<String>,

        /// Size class (small, medium, large, extraLarge, default).
        ///
        /// `default` renders with the fallback font table.
        #[arg(short, long, default_value = "large")]
        size: String,
    },

    /// Format note text without building a widget.
    Format {
        /// File to format (reads stdin if not provided).
        file: Option<PathBuf>,
    },

    /// Manage bookmarks.
    #[command(subcommand)]
    Bookmark(BookmarkCommands),
}

/// Bookmark subcommands.
#[derive(Subcommand, Debug)]
pub enum BookmarkCommands {
    /// Add or replace a bookmark.
    Add {
        /// Bookmark name.
        name: String,

        /// Note the bookmark points at.
        path: PathBuf,
    },

    /// Remove a bookmark.
    #[command(alias = "rm")]
    Remove {
        /// Bookmark name.
        name: String,
    },

    /// List all bookmarks.
    #[command(alias = "ls")]
    List,

    /// Show where a bookmark points.
    Show {
        /// Bookmark name.
        name: String,
    },
}

impl Cli {
    /// Returns the bookmark store path, using the default if not specified.
    #[must_use]
    pub fn get_bookmarks_path(&self) -> PathBuf {
        self.bookmarks
            .clone()
            .unwrap_or_else(crate::bookmark::default_store_path)
    }
}
