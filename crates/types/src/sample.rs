//! One reading produced by a sample reader.

use crate::color::Color;

/// Icon, text and accent color for a single block.
///
/// Either part may be empty. A fully empty sample makes the block vanish from
/// the status line for that pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sample {
    pub icon: String,
    pub text: String,
    pub color: Color,
}

impl Sample {
    pub fn new(icon: impl Into<String>, text: impl Into<String>, color: Color) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
            color,
        }
    }

    /// A sample with neither icon nor text
    pub fn empty(color: Color) -> Self {
        Self::new("", "", color)
    }

    pub fn is_empty(&self) -> bool {
        self.icon.is_empty() && self.text.is_empty()
    }

    /// True when the text is non-empty and made only of spaces
    pub fn text_is_blank(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c == ' ')
    }
}
