//! JSON-file backed bookmark store.

use crate::bookmark::BookmarkResolver;
use crate::error::{BookmarkError, IoError, Result};
use crate::io::{read_file, write_file};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// On-disk layout of the store.
#[derive(Debug, Default, Serialize, Deserialize)]
struct BookmarkFile {
    #[serde(default)]
    bookmarks: BTreeMap<String, PathBuf>,
}

/// A named bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    /// Bookmark name.
    pub name: String,
    /// Absolute path the bookmark points at.
    pub path: PathBuf,
}

/// Bookmark store persisted as a JSON document.
///
/// # Examples
///
/// ```
/// use vault_widget::bookmark::{BookmarkResolver, BookmarkStore};
///
/// let store = BookmarkStore::in_memory();
/// assert!(!store.bookmark_exists("ObsidianBookmark"));
/// ```
#[derive(Debug, Default)]
pub struct BookmarkStore {
    /// Backing file; `None` for an in-memory store.
    path: Option<PathBuf>,
    bookmarks: BTreeMap<String, PathBuf>,
}

impl BookmarkStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store; it is created on the first
    /// [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = if path.exists() {
            let content = read_file(path)?;
            if content.trim().is_empty() {
                BookmarkFile::default()
            } else {
                serde_json::from_str::<BookmarkFile>(&content).map_err(BookmarkError::from)?
            }
        } else {
            debug!(path = %path.display(), "bookmark store not found, starting empty");
            BookmarkFile::default()
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            bookmarks: file.bookmarks,
        })
    }

    /// Creates an empty store that is never written to disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Adds or replaces a bookmark.
    ///
    /// The target must exist; it is stored as an absolute path. Returns the
    /// path the name previously pointed at.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the target doesn't exist.
    pub fn add(&mut self, name: &str, target: &Path) -> Result<Option<PathBuf>> {
        let name = validate_name(name)?;

        let absolute = std::fs::canonicalize(target).map_err(|_| IoError::FileNotFound {
            path: target.to_string_lossy().to_string(),
        })?;

        debug!(bookmark = name, path = %absolute.display(), "adding bookmark");
        Ok(self.bookmarks.insert(name.to_string(), absolute))
    }

    /// Removes a bookmark, returning the path it pointed at.
    ///
    /// # Errors
    ///
    /// Returns [`BookmarkError::NotFound`] if no such bookmark exists.
    pub fn remove(&mut self, name: &str) -> Result<PathBuf> {
        self.bookmarks.remove(normalize(name)).ok_or_else(|| {
            BookmarkError::NotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Looks up a bookmark by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Bookmark> {
        self.bookmarks.get_key_value(normalize(name)).map(|(name, path)| Bookmark {
            name: name.clone(),
            path: path.clone(),
        })
    }

    /// Lists bookmarks ordered by name.
    #[must_use]
    pub fn list(&self) -> Vec<Bookmark> {
        self.bookmarks
            .iter()
            .map(|(name, path)| Bookmark {
                name: name.clone(),
                path: path.clone(),
            })
            .collect()
    }

    /// Returns the number of bookmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    /// Returns whether the store has no bookmarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Writes the store back to its file. No-op for in-memory stores.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let file = BookmarkFile {
            bookmarks: self.bookmarks.clone(),
        };
        let mut json = serde_json::to_string_pretty(&file).map_err(BookmarkError::from)?;
        json.push('\n');
        write_file(path, &json)?;

        debug!(path = %path.display(), count = self.len(), "saved bookmark store");
        Ok(())
    }
}

impl BookmarkResolver for BookmarkStore {
    fn bookmarked_path(&self, name: &str) -> Option<PathBuf> {
        self.bookmarks.get(normalize(name)).cloned()
    }
}

/// Names are stored and looked up without surrounding whitespace.
fn normalize(name: &str) -> &str {
    name.trim()
}

fn validate_name(name: &str) -> Result<&str> {
    let trimmed = normalize(name);
    if trimmed.is_empty() {
        return Err(BookmarkError::InvalidName {
            name: name.to_string(),
        }
        .into());
    }
    Ok(trimmed)
}
