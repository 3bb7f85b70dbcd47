//! Application settings shared between the data and UI crates

use serde::{Deserialize, Serialize};

/// Day or night colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

/// The two colour variables every theme is built from (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Foreground colour
    pub dark: [u8; 3],

    /// Background colour
    pub light: [u8; 3],
}

const INK: [u8; 3] = [10, 10, 20];
const PAPER: [u8; 3] = [255, 255, 255];

impl ThemeMode {
    /// Colour variables for this theme; night swaps day's pair
    pub fn scheme(self) -> ColorScheme {
        match self {
            ThemeMode::Day => ColorScheme { dark: INK, light: PAPER },
            ThemeMode::Night => ColorScheme { dark: PAPER, light: INK },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        }
    }

    pub fn all() -> [ThemeMode; 2] {
        [ThemeMode::Day, ThemeMode::Night]
    }
}
