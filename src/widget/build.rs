//! Builds the note widget.
//!
//! One render pass: resolve the bookmark, read and format the note, lay it
//! out. A missing bookmark is the only condition the widget reports; it
//! replaces the content with [`MISSING_BOOKMARK_MESSAGE`].

use crate::bookmark::BookmarkResolver;
use crate::core::{FontRole, SizeClass, font_size, format};
use crate::io::TextReader;
use crate::widget::{Color, Font, Widget};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Bookmark used when the widget parameter is missing or empty.
pub const DEFAULT_BOOKMARK: &str = "ObsidianBookmark";

/// How long the host should wait before rendering again.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(100);

/// Shown in place of the note when the bookmark does not exist.
pub const MISSING_BOOKMARK_MESSAGE: &str =
    "Bookmark does not exist. Open settings and create a bookmark to your vault.";

/// Color of the note text.
pub const CONTENT_COLOR: Color = Color::rgb(0xED, 0x71, 0xDB);

/// Picks the bookmark name from the widget parameter.
///
/// ```
/// use vault_widget::widget::{DEFAULT_BOOKMARK, resolve_parameter};
///
/// assert_eq!(resolve_parameter(Some("Daily")), "Daily");
/// assert_eq!(resolve_parameter(Some("")), DEFAULT_BOOKMARK);
/// assert_eq!(resolve_parameter(None), DEFAULT_BOOKMARK);
/// ```
#[must_use]
pub fn resolve_parameter(param: Option<&str>) -> &str {
    match param {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_BOOKMARK,
    }
}

/// Builds the widget for one render pass.
///
/// Never fails: a missing bookmark renders the fixed message, and a note
/// that can't be read renders like an empty one.
pub fn create_widget<B, R>(
    bookmarks: &B,
    reader: &R,
    bookmark: &str,
    family: Option<SizeClass>,
    now: SystemTime,
) -> Widget
where
    B: BookmarkResolver + ?Sized,
    R: TextReader + ?Sized,
{
    let mut widget = Widget::new(family, refresh_after(now));

    match bookmarks.bookmarked_path(bookmark) {
        None => {
            debug!(bookmark, "bookmark does not exist");
            error_message(&mut widget, MISSING_BOOKMARK_MESSAGE);
        }
        Some(path) => {
            debug!(bookmark, path = %path.display(), "reading bookmarked note");
            let raw = reader.read_string(&path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "failed to read note");
                String::new()
            });
            display_text(&mut widget, &format(&raw));
        }
    }

    widget.add_spacer();
    widget
}

fn display_text(widget: &mut Widget, content: &str) {
    let size = font_size(widget.family, FontRole::Description);
    let row = widget.add_stack();
    row.set_padding(0, 0, 0, 0);
    let text = row.add_text(content);
    text.color = CONTENT_COLOR;
    text.font = Font::regular(size);
    row.add_spacer();
}

fn error_message(widget: &mut Widget, message: &str) {
    let size = font_size(widget.family, FontRole::Description);
    let text = widget.add_text(message);
    text.color = Color::white();
    text.font = Font::bold(size);
}

fn refresh_after(now: SystemTime) -> u64 {
    let since_epoch = now.duration_since(UNIX_EPOCH).unwrap_or_default();
    (since_epoch + REFRESH_INTERVAL).as_secs()
}
