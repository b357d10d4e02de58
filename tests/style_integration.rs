// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use folio::ui::styles::{button, container};
    use folio::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;
        let status = iced::widget::button::Status::Active;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, status);
        let _ = button::outline(&theme, status);
        let _ = button::social(&theme, status);
        let _ = button::ghost(&theme, status);
        let _ = button::disabled(&theme, status);
    }

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Light;

        let _ = container::card(&theme);
        let _ = container::image_placeholder(&theme);
        let _ = container::badge(&theme);
        let _ = container::featured_badge(&theme);
        let _ = container::icon_halo(&theme);
        let _ = container::toast(&theme, palette::SUCCESS_500);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::ACCENT_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;
        let _ = spacing::SECTION;

        // Opacity
        let _ = opacity::MUTED;

        // Sizing
        let _ = sizing::TOAST_WIDTH;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);

        // Toggling never lands on System
        assert!(matches!(
            ThemeMode::System.toggled(),
            ThemeMode::Light | ThemeMode::Dark
        ));
    }
}
