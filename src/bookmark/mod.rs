//! Bookmark layer for vault-widget.
//!
//! Bookmarks give the widget a stable name for a note that lives outside
//! its own directory. The widget only resolves them; the store is edited
//! through the `bookmark` CLI commands.

pub mod store;
pub mod traits;

pub use store::{Bookmark, BookmarkStore};
pub use traits::BookmarkResolver;

use std::path::PathBuf;

/// Bookmark store file name.
pub const STORE_FILE_NAME: &str = "bookmarks.json";

/// Store path used when no config directory is available.
pub const DEFAULT_STORE_PATH: &str = ".vault-widget/bookmarks.json";

/// Returns the default bookmark store path.
///
/// `<config dir>/vault-widget/bookmarks.json`, falling back to
/// [`DEFAULT_STORE_PATH`] relative to the current directory.
#[must_use]
pub fn default_store_path() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(DEFAULT_STORE_PATH),
        |dir| dir.join("vault-widget").join(STORE_FILE_NAME),
    )
}
