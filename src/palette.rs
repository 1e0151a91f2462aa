//! Terminal Colors
//!
//! ANSI escape codes shared by everything that writes colored output.
//! A `Palette` is handed to whoever needs colors; nothing reads it
//! from a global.

/// Table of escape sequences, one per color the build output uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Resets the terminal to its default color. Always append after
    /// colored text to avoid bleeding into what follows.
    pub rst: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub brown: &'static str,
    pub blue: &'static str,
    pub yellow: &'static str,
    pub lt_cyan: &'static str,
    pub blink: &'static str,
}

impl Palette {
    pub const fn ansi() -> Self {
        Self {
            rst: "\x1b[0m",
            red: "\x1b[31m",
            green: "\x1b[32m",
            brown: "\x1b[33m",
            blue: "\x1b[34m",
            yellow: "\x1b[93m",
            lt_cyan: "\x1b[96m",
            blink: "\x1b[5m",
        }
    }

    /// Every code empty, for log files and pipes
    pub const fn plain() -> Self {
        Self {
            rst: "",
            red: "",
            green: "",
            brown: "",
            blue: "",
            yellow: "",
            lt_cyan: "",
            blink: "",
        }
    }

    pub const fn select(colored: bool) -> Self {
        if colored {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    /// Wrap `text` in `color`, resetting afterwards
    pub fn paint(&self, color: &str, text: &str) -> String {
        format!("{}{}{}", color, text, self.rst)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paint_is_identity() {
        let p = Palette::plain();
        assert_eq!(p.paint(p.red, "boom"), "boom");
    }

    #[test]
    fn test_ansi_paint_resets() {
        let p = Palette::ansi();
        assert_eq!(p.paint(p.green, "ok"), "\x1b[32mok\x1b[0m");
    }
}
