//! Content formatter.
//!
//! Turns the raw text of a vault note into display text for the widget by
//! applying a fixed, ordered list of rewrites:
//!
//! 1. leading whitespace is stripped,
//! 2. checked task markers (`- [x]`, `- [X]`) become `☑`,
//! 3. any other task marker (`- [ ]`, `- []`, `- [?]`) becomes `□`,
//! 4. a `- ` bullet at the start of a line becomes `• `, keeping the indent.
//!
//! Step 3 must follow step 2, otherwise checked boxes would be rendered as
//! empty ones.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Glyph substituted for a checked task marker.
pub const CHECKED_BOX: char = '☑';

/// Glyph substituted for an unchecked task marker.
pub const UNCHECKED_BOX: char = '□';

/// Glyph substituted for a list bullet.
pub const BULLET: char = '•';

/// Rewrite rules, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rewrite {
    CheckedTask,
    OpenTask,
    Bullet,
}

impl Rewrite {
    const ORDER: [Self; 3] = [Self::CheckedTask, Self::OpenTask, Self::Bullet];

    /// Returns the compiled regex for this rule.
    #[allow(clippy::expect_used)]
    fn regex(self) -> &'static Regex {
        macro_rules! static_regex {
            ($name:ident, $pattern:expr) => {{
                static $name: OnceLock<Regex> = OnceLock::new();
                $name.get_or_init(|| Regex::new($pattern).expect("valid regex"))
            }};
        }

        match self {
            Self::CheckedTask => static_regex!(CHECKED_TASK, r"- \[[xX]\]"),
            // `.` in the marker never spans a line terminator
            Self::OpenTask => static_regex!(OPEN_TASK, r"- \[[^\n\r\x{2028}\x{2029}]?\]"),
            Self::Bullet => static_regex!(BULLET_ITEM, r"(\n|\A)(\s*)- "),
        }
    }

    const fn replacement(self) -> &'static str {
        match self {
            Self::CheckedTask => "☑",
            Self::OpenTask => "□",
            Self::Bullet => "${1}${2}• ",
        }
    }

    fn apply(self, text: &str) -> Cow<'_, str> {
        self.regex().replace_all(text, self.replacement())
    }
}

/// Formats raw note text for display.
///
/// Total over all inputs: the empty string formats to the empty string and
/// text without any markup only loses its leading whitespace.
///
/// # Examples
///
/// ```
/// use vault_widget::core::format;
///
/// assert_eq!(format("\n\n- [x] Done\n- [ ] Todo"), "☑ Done\n□ Todo");
/// assert_eq!(format("- First\n  - Nested"), "• First\n  • Nested");
/// ```
#[must_use]
pub fn format(raw: &str) -> String {
    let mut text = strip_leading_whitespace(raw).to_string();
    for rule in Rewrite::ORDER {
        let rewritten = match rule.apply(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        if let Some(s) = rewritten {
            text = s;
        }
    }
    text
}

/// Strips whitespace, including a byte-order mark, from the start only.
fn strip_leading_whitespace(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
