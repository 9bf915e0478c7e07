use std::fmt::{ Display, Formatter };

/// The two visual modes the toggle switches between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    /// Interprets a persisted preference. Only the exact value `"dark"` selects
    /// dark mode; missing or unrecognized values fall back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeState::Dark,
            _ => ThemeState::Light,
        }
    }

    pub fn from_marker(present: bool) -> Self {
        if present { ThemeState::Dark } else { ThemeState::Light }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeState::Dark
    }

    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeState::Light => "light",
            ThemeState::Dark => "dark",
        }
    }
}

impl Display for ThemeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
