//! Widget tree model.
//!
//! A deliberately small subset of a home-screen widget: text, horizontal
//! stacks and spacers. The tree is serializable so another renderer can
//! consume it as JSON.

use crate::core::SizeClass;
use serde::{Serialize, Serializer};
use std::fmt;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Plain white.
    #[must_use]
    pub const fn white() -> Self {
        Self::rgb(0xFF, 0xFF, 0xFF)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Font weight of the system font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight.
    Regular,
    /// Bold weight.
    Bold,
}

/// A system font at a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Font {
    /// Weight.
    pub weight: FontWeight,
    /// Size in points.
    pub size: u16,
}

impl Font {
    /// Regular system font.
    #[must_use]
    pub const fn regular(size: u16) -> Self {
        Self {
            weight: FontWeight::Regular,
            size,
        }
    }

    /// Bold system font.
    #[must_use]
    pub const fn bold(size: u16) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
        }
    }
}

/// A block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetText {
    /// The text itself; may span several lines.
    pub text: String,
    /// Text color.
    pub color: Color,
    /// Text font.
    pub font: Font,
}

impl WidgetText {
    /// Creates text in white, regular 12pt.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::white(),
            font: Font::regular(12),
        }
    }
}

/// A node in the widget tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    /// Text block.
    Text(WidgetText),
    /// Horizontal stack.
    Stack(Stack),
    /// Flexible space.
    Spacer,
}

/// A horizontal stack of elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stack {
    /// Padding as top, leading, bottom, trailing.
    pub padding: [u16; 4],
    /// Child elements.
    pub children: Vec<Element>,
}

impl Stack {
    /// Sets the padding.
    pub const fn set_padding(&mut self, top: u16, leading: u16, bottom: u16, trailing: u16) {
        self.padding = [top, leading, bottom, trailing];
    }

    /// Appends text, returning it for styling.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut WidgetText {
        push_text(&mut self.children, text.into())
    }

    /// Appends a spacer.
    pub fn add_spacer(&mut self) {
        self.children.push(Element::Spacer);
    }
}

/// A rendered widget: the root of the tree plus host hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Widget {
    /// Size class the widget was laid out for, if the host supplied one.
    pub family: Option<SizeClass>,
    /// Unix timestamp (seconds) after which the host should refresh.
    pub refresh_after: u64,
    /// Top-level elements, stacked vertically.
    pub elements: Vec<Element>,
}

impl Widget {
    /// Creates an empty widget.
    #[must_use]
    pub const fn new(family: Option<SizeClass>, refresh_after: u64) -> Self {
        Self {
            family,
            refresh_after,
            elements: Vec::new(),
        }
    }

    /// Appends text, returning it for styling.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut WidgetText {
        push_text(&mut self.elements, text.into())
    }

    /// Appends a horizontal stack, returning it for filling.
    pub fn add_stack(&mut self) -> &mut Stack {
        self.elements.push(Element::Stack(Stack::default()));
        match self.elements.last_mut() {
            Some(Element::Stack(stack)) => stack,
            _ => unreachable!("stack was just pushed"),
        }
    }

    /// Appends a spacer.
    pub fn add_spacer(&mut self) {
        self.elements.push(Element::Spacer);
    }

    /// Iterates over every text block, depth first.
    pub fn texts(&self) -> impl Iterator<Item = &WidgetText> {
        let mut found = Vec::new();
        collect_texts(&self.elements, &mut found);
        found.into_iter()
    }
}

fn push_text(elements: &mut Vec<Element>, text: String) -> &mut WidgetText {
    elements.push(Element::Text(WidgetText::new(text)));
    match elements.last_mut() {
        Some(Element::Text(text)) => text,
        _ => unreachable!("text was just pushed"),
    }
}

fn collect_texts<'a>(elements: &'a [Element], found: &mut Vec<&'a WidgetText>) {
    for element in elements {
        match element {
            Element::Text(text) => found.push(text),
            Element::Stack(stack) => collect_texts(&stack.children, found),
            Element::Spacer => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(Color::rgb(0xED, 0x71, 0xDB).to_string(), "#ED71DB");
        assert_eq!(Color::white().to_string(), "#FFFFFF");
    }

    #[test]
    fn test_build_tree() {
        let mut widget = Widget::new(Some(SizeClass::Small), 100);
        widget.add_text("heading").font = Font::bold(20);
        let stack = widget.add_stack();
        stack.set_padding(0, 0, 0, 0);
        stack.add_text("body");
        stack.add_spacer();
        widget.add_spacer();

        assert_eq!(widget.elements.len(), 3);
        let texts: Vec<&str> = widget.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["heading", "body"]);
    }

    #[test]
    fn test_serialize() {
        let mut widget = Widget::new(Some(SizeClass::ExtraLarge), 42);
        widget.add_text("hi").color = Color::rgb(0, 0x80, 0xFF);
        widget.add_spacer();

        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["family"], "extraLarge");
        assert_eq!(json["refresh_after"], 42);
        assert_eq!(json["elements"][0]["type"], "text");
        assert_eq!(json["elements"][0]["color"], "#0080FF");
        assert_eq!(json["elements"][0]["font"]["weight"], "regular");
        assert_eq!(json["elements"][1]["type"], "spacer");
    }
}
