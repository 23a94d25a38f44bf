//! I/O utilities for vault-widget.
//!
//! Provides whole-file note reading behind the [`TextReader`] seam, file
//! writing for the bookmark store, and grapheme-aware layout helpers.

pub mod reader;
pub mod unicode;

pub use reader::{FileReader, FsReader, TextReader, read_file, write_file};
pub use unicode::{grapheme_count, pad_graphemes, wrap_graphemes};
