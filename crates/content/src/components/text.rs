//! Text leaf.

use crate::tag::ComponentTag;

/// Typographic role of a text node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Heading text.
    Title,
    /// Regular running text.
    #[default]
    Body,
    /// Small supplementary text.
    Footnote,
}

impl TextStyle {
    /// All styles, in wire declaration order.
    pub const ALL: [TextStyle; 3] = [TextStyle::Title, TextStyle::Body, TextStyle::Footnote];

    /// Convert to the wire format string.
    pub fn to_wire(self) -> &'static str {
        match self {
            TextStyle::Title => "title",
            TextStyle::Body => "body",
            TextStyle::Footnote => "footnote",
        }
    }

    /// Parse from the wire format string.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "title" => Some(TextStyle::Title),
            "body" => Some(TextStyle::Body),
            "footnote" => Some(TextStyle::Footnote),
            _ => None,
        }
    }
}

/// A run of text with a style.
///
/// Identity is the text payload alone, so two texts differing only in style key the same.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Text {
    pub text: String,
    pub style: TextStyle,
}

impl Text {
    pub const TAG: ComponentTag = ComponentTag::Text;

    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn identity(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for style in TextStyle::ALL {
            assert_eq!(TextStyle::from_wire(style.to_wire()), Some(style));
        }
        assert_eq!(TextStyle::from_wire("Title"), None);
        assert_eq!(TextStyle::from_wire("caption"), None);
    }

    #[test]
    fn default_style_is_body() {
        assert_eq!(TextStyle::default(), TextStyle::Body);
    }
}
