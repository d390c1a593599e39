//! Terminal colours per theme.

use ratatui::style::Color;

use crate::model::Theme;

/// Colours used to draw the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub warning: Color,
    pub error: Color,
    pub success: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                warning: Color::Yellow,
                error: Color::LightRed,
                success: Color::LightGreen,
            },
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                warning: Color::Rgb(180, 120, 0),
                error: Color::Red,
                success: Color::Green,
            },
        }
    }
}
