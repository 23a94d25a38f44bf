//! Bookmark resolver trait.

use std::path::PathBuf;

/// Resolves named bookmarks to file-system paths.
///
/// A bookmark is a host-managed alias for a location outside the widget's
/// own directory, typically a note inside a vault.
pub trait BookmarkResolver {
    /// Returns the path a bookmark points at, or `None` if it doesn't exist.
    fn bookmarked_path(&self, name: &str) -> Option<PathBuf>;

    /// Returns whether a bookmark with this name exists.
    fn bookmark_exists(&self, name: &str) -> bool {
        self.bookmarked_path(name).is_some()
    }
}
