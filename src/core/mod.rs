//! Core types for vault-widget.
//!
//! The content formatter and the size-class configuration it is rendered
//! with. Nothing here touches the filesystem.

pub mod formatter;
pub mod size;

pub use formatter::format;
pub use size::{DEFAULT_FONTS, FontRole, SizeClass, WidgetFonts, font_size};
