//! Terminal color palette
//!
//! A fixed set of ANSI foreground colors (8 base + 8 bright) plus the reset
//! sequence. Escapes are emitted verbatim, independent of terminal detection,
//! so rendered output is deterministic. `colored` decides per terminal whether
//! to emit codes at all, so it is not used for rendering; [`Color`] converts
//! into [`colored::Color`] for callers that style other output with it.

use serde::{Deserialize, Serialize};

/// SGR sequence that restores the terminal's default attributes.
pub const RESET: &str = "\u{1b}[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Escape sequence that switches the foreground to this color.
    pub const fn escape(self) -> &'static str {
        match self {
            Color::Black => "\u{1b}[30m",
            Color::Red => "\u{1b}[31m",
            Color::Green => "\u{1b}[32m",
            Color::Yellow => "\u{1b}[33m",
            Color::Blue => "\u{1b}[34m",
            Color::Magenta => "\u{1b}[35m",
            Color::Cyan => "\u{1b}[36m",
            Color::White => "\u{1b}[37m",
            Color::BrightBlack => "\u{1b}[90m",
            Color::BrightRed => "\u{1b}[91m",
            Color::BrightGreen => "\u{1b}[92m",
            Color::BrightYellow => "\u{1b}[93m",
            Color::BrightBlue => "\u{1b}[94m",
            Color::BrightMagenta => "\u{1b}[95m",
            Color::BrightCyan => "\u{1b}[96m",
            Color::BrightWhite => "\u{1b}[97m",
        }
    }
}

impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        use colored::Color as C;
        match color {
            Color::Black => C::Black,
            Color::Red => C::Red,
            Color::Green => C::Green,
            Color::Yellow => C::Yellow,
            Color::Blue => C::Blue,
            Color::Magenta => C::Magenta,
            Color::Cyan => C::Cyan,
            Color::White => C::White,
            Color::BrightBlack => C::BrightBlack,
            Color::BrightRed => C::BrightRed,
            Color::BrightGreen => C::BrightGreen,
            Color::BrightYellow => C::BrightYellow,
            Color::BrightBlue => C::BrightBlue,
            Color::BrightMagenta => C::BrightMagenta,
            Color::BrightCyan => C::BrightCyan,
            Color::BrightWhite => C::BrightWhite,
        }
    }
}

/// Wrap `text` in `color` followed by a single reset.
pub fn paint(color: Color, text: &str) -> String {
    let mut out = String::with_capacity(color.escape().len() + text.len() + RESET.len());
    push_painted(&mut out, color, text);
    out
}

pub(crate) fn push_painted(out: &mut String, color: Color, text: &str) {
    out.push_str(color.escape());
    out.push_str(text);
    out.push_str(RESET);
}

/// Remove every `ESC [ ... m` sequence from `text`.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint() {
        assert_eq!(paint(Color::Red, "boom"), "\u{1b}[31mboom\u{1b}[0m");
        assert_eq!(paint(Color::BrightBlack, ""), "\u{1b}[90m\u{1b}[0m");
    }

    #[test]
    fn test_escape_matches_colored_codes() {
        for color in [Color::Black, Color::Cyan, Color::BrightRed, Color::BrightWhite] {
            let code = colored::Color::from(color).to_fg_str().to_string();
            assert_eq!(color.escape(), format!("\u{1b}[{}m", code));
        }
    }

    #[test]
    fn test_strip_ansi() {
        let painted = format!("a{}c", paint(Color::Green, "b"));
        assert_eq!(strip_ansi(&painted), "abc");
        assert_eq!(strip_ansi("plain $m"), "plain $m");
    }
}
