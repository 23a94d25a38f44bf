//! Widget size classes and the font lookup table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display-size variant supplied by the host at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizeClass {
    /// Small square widget.
    Small,
    /// Medium, two columns wide.
    Medium,
    /// Large, two columns by two rows.
    Large,
    /// Extra large (tablets only).
    ExtraLarge,
}

/// Font sizes and row budget for one size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidgetFonts {
    /// Title font size in points.
    pub title: u16,
    /// Description (body) font size in points.
    pub description: u16,
    /// Rows of output the class comfortably holds.
    pub row_output: usize,
}

/// Font role looked up in [`WidgetFonts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// Heading text.
    Title,
    /// Body text, used for note content and messages.
    Description,
}

const SMALL: WidgetFonts = WidgetFonts {
    title: 20,
    description: 12,
    row_output: 5,
};
const MEDIUM: WidgetFonts = WidgetFonts {
    title: 20,
    description: 12,
    row_output: 5,
};
const LARGE: WidgetFonts = WidgetFonts {
    title: 20,
    description: 12,
    row_output: 12,
};
const EXTRA_LARGE: WidgetFonts = WidgetFonts {
    title: 20,
    description: 12,
    row_output: 12,
};

/// Row used when the host supplies no (or an unrecognized) size class.
pub const DEFAULT_FONTS: WidgetFonts = WidgetFonts {
    title: 20,
    description: 12,
    row_output: 12,
};

impl SizeClass {
    /// All size classes, smallest first.
    pub const ALL: [Self; 4] = [Self::Small, Self::Medium, Self::Large, Self::ExtraLarge];

    /// Parses a size class name, case-insensitively.
    ///
    /// Returns `None` for unknown names so callers fall back to
    /// [`DEFAULT_FONTS`].
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "extralarge" | "extra-large" | "extra_large" => Some(Self::ExtraLarge),
            _ => None,
        }
    }

    /// Returns the host-facing name of the class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extraLarge",
        }
    }

    /// Columns available to text in the terminal preview.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::Small => 22,
            Self::Medium | Self::Large => 46,
            Self::ExtraLarge => 94,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl WidgetFonts {
    /// Looks up the font row for a size class.
    #[must_use]
    pub const fn for_family(family: Option<SizeClass>) -> &'static Self {
        match family {
            Some(SizeClass::Small) => &SMALL,
            Some(SizeClass::Medium) => &MEDIUM,
            Some(SizeClass::Large) => &LARGE,
            Some(SizeClass::ExtraLarge) => &EXTRA_LARGE,
            None => &DEFAULT_FONTS,
        }
    }

    /// Returns the size for a font role.
    #[must_use]
    pub const fn size(&self, role: FontRole) -> u16 {
        match role {
            FontRole::Title => self.title,
            FontRole::Description => self.description,
        }
    }
}

/// Returns the font size for `role` in the given size class.
#[must_use]
pub const fn font_size(family: Option<SizeClass>, role: FontRole) -> u16 {
    WidgetFonts::for_family(family).size(role)
}
