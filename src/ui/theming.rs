// SPDX-License-Identifier: MPL-2.0
//! Light/dark/system theme handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the form uses on top of the iced base theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub text_secondary: Color,

    /// Highlight behind the UTC clock.
    pub clock_background: Color,
    pub clock_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            text_secondary: palette::GRAY_700,
            clock_background: palette::CLOCK_YELLOW,
            clock_text: palette::GRAY_900,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            text_secondary: palette::GRAY_200,
            clock_background: palette::CLOCK_YELLOW_DIM,
            clock_text: palette::GRAY_900,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detection errors count as dark
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Settles `System` into a concrete appearance.
    ///
    /// System detection can block on a desktop-portal round trip, so callers
    /// resolve once at startup and keep the result.
    #[must_use]
    pub fn resolve(self) -> Appearance {
        if self.is_dark() {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }
}

/// Effective light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            Appearance::Light => Theme::Light,
            Appearance::Dark => Theme::Dark,
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            Appearance::Light => ColorScheme::light(),
            Appearance::Dark => ColorScheme::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on the desktop; only check it does not panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert_eq!(ThemeMode::Light.resolve(), Appearance::Light);
        assert_eq!(ThemeMode::Dark.resolve(), Appearance::Dark);
    }

    #[test]
    fn appearances_map_to_iced_themes() {
        assert_eq!(Appearance::Light.iced_theme(), Theme::Light);
        assert_eq!(Appearance::Dark.iced_theme(), Theme::Dark);
    }

    #[test]
    fn secondary_text_contrasts_with_background() {
        assert!(ColorScheme::light().text_secondary.r < 0.5);
        assert!(ColorScheme::dark().text_secondary.r > 0.5);
    }

    #[test]
    fn theme_mode_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"dark\"").unwrap();
        assert_eq!(parsed.mode, ThemeMode::Dark);
    }
}
