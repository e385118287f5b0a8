//! Fragment formatting
//!
//! Turns a [`Sample`] into the text one block contributes to the status line.
//! Styled spans are wrapped in color markup understood by the status bar; the
//! markup dialect is selected by [`Markup`].

use rg_status_types::{Color, Sample};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Color markup dialect understood by the consumer of the status line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Markup {
    /// dwm status2d: `^c#fg^^b#bg^` sets colors, `^d^` resets them
    #[serde(rename = "status2d")]
    #[default]
    Status2d,
    /// No color markup at all
    #[serde(rename = "plain")]
    Plain,
}

impl Markup {
    fn open(self, out: &mut String, fg: Color, bg: Color) {
        match self {
            // Writing to a String cannot fail
            Markup::Status2d => {
                let _ = write!(out, "^c{}^^b{}^", fg, bg);
            }
            Markup::Plain => {}
        }
    }

    fn close(self, out: &mut String) {
        match self {
            Markup::Status2d => out.push_str("^d^"),
            Markup::Plain => {}
        }
    }
}

/// Render one sample against the bar background.
///
/// The icon is drawn inverted (background color on the sample color), the
/// text in the sample color on the background. Every styled fragment ends
/// with a color reset so fragments never leak colors into each other. Text
/// made only of spaces is treated as padding and never gets its own span.
pub fn format_fragment(sample: &Sample, background: Color, markup: Markup) -> String {
    let has_icon = !sample.icon.is_empty();
    let has_text = !sample.text.is_empty();
    let blank = sample.text_is_blank();
    let mut out = String::with_capacity(sample.icon.len() + sample.text.len() + 64);

    match (has_icon, has_text) {
        (true, true) => {
            markup.open(&mut out, background, sample.color);
            out.push(' ');
            out.push_str(&sample.icon);
            out.push(' ');
            markup.open(&mut out, sample.color, background);
            if blank {
                out.push_str(&sample.text);
            } else {
                out.push(' ');
                out.push_str(&sample.text);
                out.push(' ');
            }
            markup.close(&mut out);
        }
        (false, true) if blank => out.push_str(&sample.text),
        (false, true) => {
            markup.open(&mut out, sample.color, background);
            out.push(' ');
            out.push_str(&sample.text);
            out.push(' ');
            markup.close(&mut out);
        }
        (true, false) => {
            markup.open(&mut out, background, sample.color);
            out.push(' ');
            out.push_str(&sample.icon);
            out.push(' ');
            markup.close(&mut out);
        }
        (false, false) => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::from_hex_const("#282828");
    const FG: Color = Color::from_hex_const("#a3be8c");

    fn sample(icon: &str, text: &str) -> Sample {
        Sample::new(icon, text, FG)
    }

    #[test]
    fn test_icon_and_text() {
        let out = format_fragment(&sample("★", "42%"), BG, Markup::Status2d);
        assert_eq!(out, "^c#282828^^b#a3be8c^ ★ ^c#a3be8c^^b#282828^ 42% ^d^");
    }

    #[test]
    fn test_icon_and_blank_text_is_compact() {
        let out = format_fragment(&sample("★", " "), BG, Markup::Status2d);
        assert_eq!(out, "^c#282828^^b#a3be8c^ ★ ^c#a3be8c^^b#282828^ ^d^");
    }

    #[test]
    fn test_text_only() {
        let out = format_fragment(&sample("", "12:30"), BG, Markup::Status2d);
        assert_eq!(out, "^c#a3be8c^^b#282828^ 12:30 ^d^");
    }

    #[test]
    fn test_blank_text_only_is_unstyled() {
        let out = format_fragment(&sample("", "  "), BG, Markup::Status2d);
        assert_eq!(out, "  ");
    }

    #[test]
    fn test_icon_only() {
        let out = format_fragment(&sample("★", ""), BG, Markup::Status2d);
        assert_eq!(out, "^c#282828^^b#a3be8c^ ★ ^d^");
    }

    #[test]
    fn test_empty_sample() {
        assert_eq!(format_fragment(&sample("", ""), BG, Markup::Status2d), "");
    }

    #[test]
    fn test_markup_is_balanced() {
        for (icon, text) in [("★", "42%"), ("★", " "), ("", "x"), ("★", "")] {
            let out = format_fragment(&sample(icon, text), BG, Markup::Status2d);
            assert!(out.ends_with("^d^"), "unbalanced fragment {:?}", out);
            assert_eq!(out.matches("^d^").count(), 1);
        }
    }

    #[test]
    fn test_plain_markup() {
        let out = format_fragment(&sample("★", "42%"), BG, Markup::Plain);
        assert_eq!(out, " ★  42% ");
    }
}
