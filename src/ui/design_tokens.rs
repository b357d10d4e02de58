// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Animation durations and distances

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.11);
    pub const GRAY_700: Color = Color::from_rgb(0.25, 0.25, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.72, 0.72, 0.76);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.91);

    // Brand colors (violet scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.92, 0.89, 1.0);
    pub const PRIMARY_200: Color = Color::from_rgb(0.83, 0.78, 0.98);
    pub const PRIMARY_400: Color = Color::from_rgb(0.62, 0.51, 0.96);
    pub const PRIMARY_500: Color = Color::from_rgb(0.52, 0.39, 0.92);
    pub const PRIMARY_600: Color = Color::from_rgb(0.44, 0.3, 0.84);
    pub const PRIMARY_700: Color = Color::from_rgb(0.36, 0.23, 0.72);

    // Accent (teal) used for the gradient-text spans and featured badges
    pub const ACCENT_400: Color = Color::from_rgb(0.24, 0.78, 0.72);
    pub const ACCENT_500: Color = Color::from_rgb(0.16, 0.68, 0.62);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Disabled controls (the "coming soon" placeholder action).
    pub const DISABLED: f32 = 0.5;

    /// Secondary text relative to primary text.
    pub const MUTED: f32 = 0.75;

    /// Surface background - semi-transparent panels and cards
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 80.0; // 10 units, vertical section padding
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const SOCIAL_BUTTON: f32 = 48.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1080.0;
    pub const CARD_WIDTH: f32 = 330.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 140.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the page's text hierarchy.

    /// Hero display title
    pub const DISPLAY: f32 = 56.0;

    /// Large title - section headings
    pub const TITLE_LG: f32 = 38.0;

    /// Medium title - card titles, panel headings
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - subheadings
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - hero subtitle, lead paragraphs
    pub const BODY_LG: f32 = 17.0;

    /// Standard body - most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - badges, hints, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Motion Tokens
// ============================================================================

pub mod motion {
    //! Durations (seconds) and travel distances (pixels) for the entrance
    //! animations, taken together as one tuning surface.

    /// Initial delay before the hero timeline starts.
    pub const HERO_DELAY: f32 = 0.2;
    /// Slide distance for headings entering from below.
    pub const SLIDE_LG: f32 = 50.0;
    /// Slide distance for body copy and buttons.
    pub const SLIDE_MD: f32 = 30.0;
    /// Sideways slide distance for the contact columns.
    pub const SLIDE_X: f32 = 50.0;
    /// Card lift distance in the showcase grid.
    pub const CARD_LIFT: f32 = 60.0;
    /// Stagger between sibling reveals.
    pub const STAGGER: f32 = 0.1;
    /// One-way travel of the scroll-hint bob.
    pub const BOB_DISTANCE: f32 = 10.0;
    /// One-way period of the scroll-hint bob.
    pub const BOB_PERIOD: f32 = 1.5;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Motion validation
    assert!(motion::STAGGER > 0.0);
    assert!(motion::BOB_PERIOD > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn slide_distances_match_motion_hierarchy() {
        assert!(motion::SLIDE_LG > motion::SLIDE_MD);
        assert!(motion::CARD_LIFT > motion::SLIDE_LG);
    }
}
