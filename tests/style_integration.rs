// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use seiswave_scanner::ui::design_tokens::{palette, sizing, spacing};
    use seiswave_scanner::ui::notifications::Severity;
    use seiswave_scanner::ui::theming::{Appearance, ColorScheme, ThemeMode};

    #[test]
    fn form_fits_in_default_window() {
        assert!(sizing::LABEL_WIDTH + sizing::PICKER_WIDTH + 2.0 * spacing::LG < sizing::WINDOW_WIDTH);
        assert!(sizing::TOAST_WIDTH < sizing::WINDOW_WIDTH);
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Light.resolve().iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.resolve().iced_theme(), Theme::Dark);
        assert_eq!(Appearance::Dark.colors().clock_text, palette::GRAY_900);
    }

    #[test]
    fn clock_highlight_is_yellow_in_light_mode() {
        let colors = ColorScheme::light();
        assert_eq!(colors.clock_background, palette::CLOCK_YELLOW);
        assert!(colors.clock_background.b < 0.1);
    }

    #[test]
    fn toast_accents_match_palette() {
        assert_eq!(Severity::Warning.color(), palette::WARNING_500);
        assert_eq!(Severity::Success.color(), palette::SUCCESS_500);
        assert_eq!(Severity::Error.color(), palette::ERROR_500);
    }
}
