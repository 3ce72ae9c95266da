//! Console front end: themed line output for the exploration session

pub mod session;

pub use session::{drive, run, run_with, SessionOptions};

use crossterm::style::{Color, Stylize};

/// Color scheme for console output
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub clue: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            clue: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::DarkYellow,
            enabled: true,
        }
    }
}

impl Theme {
    /// A theme that passes text through unstyled.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Wrap text in the given color when styling is on.
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}
