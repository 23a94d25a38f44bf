//! # vault-widget
//!
//! Shows one bookmarked note from a note-taking vault as a home-screen
//! style widget.
//!
//! A render pass resolves the bookmark, reads the note and runs it through
//! the content formatter, which strips leading whitespace and turns task
//! markers and list dashes into `☑`, `□` and `•`. The result is laid out as
//! a small widget tree that can be previewed in a terminal or exported as
//! JSON.
//!
//! ## Features
//!
//! - **Formatter**: pure, total `format(&str) -> String`
//! - **Bookmarks**: JSON-backed named aliases for notes
//! - **Size classes**: per-class font table and preview width
//! - **Unicode Aware**: grapheme-based wrapping in the preview

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bookmark;
pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod widget;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core types
pub use crate::core::{FontRole, SizeClass, WidgetFonts, format};

// Re-export bookmark types
pub use bookmark::{Bookmark, BookmarkResolver, BookmarkStore, default_store_path};

// Re-export I/O types
pub use io::{FsReader, TextReader};

// Re-export widget types
pub use widget::{
    DEFAULT_BOOKMARK, MISSING_BOOKMARK_MESSAGE, Widget, create_widget, resolve_parameter,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
