//! Console styling, built once at startup and passed to whoever prints.

use ratatui::crossterm::style::{Color, ContentStyle, Stylize};
use std::ffi::OsStr;
use std::io::IsTerminal;
use unicode_width::UnicodeWidthStr;

/// Column width every rendered message is padded to.
pub const MESSAGE_WIDTH: usize = 30;
const FOREGROUND: Color = Color::Rgb {
    r: 0xFA,
    g: 0xFA,
    b: 0xFA,
};

/// Any non-empty value turns styling off.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone)]
pub struct Style {
    content: ContentStyle,
    colored: bool,
    width: usize,
}

impl Style {
    /// Bold near-white text padded to [`MESSAGE_WIDTH`] columns.
    pub fn new(colored: bool) -> Self {
        Self {
            content: ContentStyle::new().bold().with(FOREGROUND),
            colored,
            width: MESSAGE_WIDTH,
        }
    }

    /// Padding only, no escape sequences.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Color is used only when stdout is a terminal, `NO_COLOR` is unset and
    /// the caller has not disabled it.
    pub fn detect(disable_color: bool) -> Self {
        let no_color = std::env::var_os(NO_COLOR_ENV);
        Self::new(wants_color(
            disable_color,
            no_color.as_deref(),
            std::io::stdout().is_terminal(),
        ))
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    pub fn render(&self, text: &str) -> String {
        let padding = self.width.saturating_sub(text.width());
        let padded = format!("{text}{}", " ".repeat(padding));
        if self.colored {
            self.content.apply(padded).to_string()
        } else {
            padded
        }
    }
}

fn wants_color(disable_color: bool, no_color: Option<&OsStr>, is_terminal: bool) -> bool {
    let no_color_set = no_color.is_some_and(|value| !value.is_empty());
    !disable_color && !no_color_set && is_terminal
}

impl Default for Style {
    fn default() -> Self {
        Self::plain()
    }
}
