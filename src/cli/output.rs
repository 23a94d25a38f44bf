//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats. The text form of a widget is a
//! terminal preview: a box as wide as the size class, with spacers padding
//! it to the class's row budget.

use crate::bookmark::Bookmark;
use crate::core::WidgetFonts;
use crate::error::Error;
use crate::io::{grapheme_count, pad_graphemes, wrap_graphemes};
use crate::widget::{Element, Widget};
use serde::Serialize;
use std::fmt::Write;

/// Columns used when the widget has no size class.
const DEFAULT_COLUMNS: usize = 46;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a rendered widget.
#[must_use]
pub fn format_widget(widget: &Widget, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_widget_text(widget),
        OutputFormat::Json => format_json(widget),
    }
}

fn format_widget_text(widget: &Widget) -> String {
    let columns = widget.family.map_or(DEFAULT_COLUMNS, |f| f.columns());
    let min_rows = WidgetFonts::for_family(widget.family).row_output;

    let mut rows = Vec::new();
    let has_spacer = layout_rows(&widget.elements, columns, &mut rows);
    if has_spacer && rows.len() < min_rows {
        rows.resize(min_rows, String::new());
    }

    let label = widget.family.map_or("default", |f| f.name());
    let mut output = String::new();

    let mut top = format!("╭─ {label} ");
    let filled = grapheme_count(&top) - 1;
    top.push_str(&"─".repeat((columns + 2).saturating_sub(filled)));
    top.push('╮');
    output.push_str(&top);
    output.push('\n');

    for row in &rows {
        let _ = writeln!(output, "│ {} │", pad_graphemes(row, columns));
    }

    output.push('╰');
    output.push_str(&"─".repeat(columns + 2));
    output.push_str("╯\n");
    output
}

/// Flattens elements into wrapped rows; returns whether a spacer was seen.
fn layout_rows(elements: &[Element], columns: usize, rows: &mut Vec<String>) -> bool {
    let mut has_spacer = false;
    for element in elements {
        match element {
            Element::Text(text) => {
                for line in text.text.split('\n') {
                    let line = line.strip_suffix('\r').unwrap_or(line);
                    rows.extend(
                        wrap_graphemes(line, columns)
                            .into_iter()
                            .map(str::to_string),
                    );
                }
            }
            Element::Stack(stack) => {
                has_spacer |= layout_rows(&stack.children, columns, rows);
            }
            Element::Spacer => has_spacer = true,
        }
    }
    has_spacer
}

/// Formats formatter output.
#[must_use]
pub fn format_text(text: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = text.to_string();
            if !output.is_empty() && !output.ends_with('\n') {
                output.push('\n');
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct TextOutput<'a> {
                text: &'a str,
            }
            format_json(&TextOutput { text })
        }
    }
}

/// Formats a bookmark list.
#[must_use]
pub fn format_bookmark_list(bookmarks: &[Bookmark], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_bookmark_list_text(bookmarks),
        OutputFormat::Json => format_json(&bookmarks),
    }
}

fn format_bookmark_list_text(bookmarks: &[Bookmark]) -> String {
    if bookmarks.is_empty() {
        return "No bookmarks found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Bookmarks:\n");
    let _ = writeln!(output, "{:<24} Path", "Name");
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for bookmark in bookmarks {
        let _ = writeln!(
            output,
            "{:<24} {}",
            truncate(&bookmark.name, 24),
            bookmark.path.display()
        );
    }

    output
}

/// Formats a single bookmark.
#[must_use]
pub fn format_bookmark(bookmark: &Bookmark, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Bookmark: {}", bookmark.name);
            let _ = writeln!(output, "  Path:   {}", bookmark.path.display());
            let _ = writeln!(
                output,
                "  Exists: {}",
                if bookmark.path.exists() { "yes" } else { "no" }
            );
            output
        }
        OutputFormat::Json => format_json(bookmark),
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: err.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Truncates a string to `max_len` graphemes with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    if grapheme_count(s) <= max_len {
        s.to_string()
    } else {
        let kept = wrap_graphemes(s, max_len.saturating_sub(3))
            .first()
            .copied()
            .unwrap_or_default();
        format!("{kept}...")
    }
}
