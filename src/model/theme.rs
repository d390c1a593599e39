use std::fmt;

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Icon shown on the theme toggle. It depicts the action, not the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl Theme {
    /// The value written to the store and to the root theme marker.
    pub fn code(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored theme value.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme implied by the system colour-scheme preference.
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// The theme a toggle would switch to.
    pub fn other(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon for the toggle while this theme is active.
    pub fn toggle_icon(self) -> ToggleIcon {
        match self.other() {
            Self::Light => ToggleIcon::Sun,
            Self::Dark => ToggleIcon::Moon,
        }
    }

    /// Accessible label for the toggle while this theme is active.
    pub fn toggle_label(self) -> &'static str {
        match self.other() {
            Self::Light => "Switch to light mode",
            Self::Dark => "Switch to dark mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_code(theme.code()), Some(theme));
        }
        assert_eq!(Theme::from_code("Dark"), None);
    }

    #[test]
    fn preference_maps_to_theme() {
        assert_eq!(Theme::from_preference(true), Theme::Dark);
        assert_eq!(Theme::from_preference(false), Theme::Light);
    }

    #[test]
    fn toggle_shows_the_other_state() {
        assert_eq!(Theme::Dark.toggle_icon(), ToggleIcon::Sun);
        assert_eq!(Theme::Light.toggle_icon(), ToggleIcon::Moon);
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
    }
}
