//! File reading and writing.
//!
//! The widget reads exactly one note per render, so reads are whole-file
//! and synchronous.

use crate::error::{IoError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Maximum note size read into memory (16MB).
const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Source of note text.
///
/// The widget builder only depends on this trait so tests and other hosts
/// can supply text without touching the filesystem.
pub trait TextReader {
    /// Reads the full contents of `path` as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or not UTF-8.
    fn read_string(&self, path: &Path) -> Result<String>;
}

/// [`TextReader`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl TextReader for FsReader {
    fn read_string(&self, path: &Path) -> Result<String> {
        read_file(path)
    }
}

/// An opened note file.
///
/// # Examples
///
/// ```no_run
/// use vault_widget::io::FileReader;
///
/// let reader = FileReader::open("vault/Today.md").unwrap();
/// let content = reader.read_to_string().unwrap();
/// ```
pub struct FileReader {
    /// File handle.
    file: File,
    /// File size in bytes.
    size: u64,
    /// File path for error messages.
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be opened or is
    /// larger than the note size limit.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let metadata = file.metadata().map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        if metadata.is_dir() {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: "is a directory".to_string(),
            }
            .into());
        }

        let size = metadata.len();
        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Reads the file content as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or content is not valid UTF-8.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_to_string(&self) -> Result<String> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        String::from_utf8(buffer).map_err(|e| {
            IoError::ReadFailed {
                path: self.path.clone(),
                reason: format!("invalid UTF-8: {e}"),
            }
            .into()
        })
    }
}

/// Reads a file to string.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    FileReader::open(path)?.read_to_string()
}

/// Writes content to a file, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(())
}
