// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call-to-action: filled pill in the brand color.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: match status {
            button::Status::Hovered => shadow::MD,
            _ => shadow::SM,
        },
        snap: true,
    }
}

/// Outlined pill, text in the current theme's base color.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hovered = matches!(status, button::Status::Hovered);
    button::Style {
        background: hovered.then(|| {
            Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_400
            })
        }),
        text_color: base.text,
        border: Border {
            color: if hovered {
                palette::PRIMARY_400
            } else {
                palette::GRAY_400
            },
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round icon button for social links.
pub fn social(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_400
            })),
            _ => None,
        },
        text_color: base.text,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button for inline links and the scroll hint.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            _ => None,
        },
        text_color: base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Grayed-out, non-interactive placeholder (the "coming soon" action).
pub fn disabled(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        text_color: Color {
            a: opacity::DISABLED,
            ..palette::GRAY_400
        },
        border: Border {
            color: Color {
                a: opacity::DISABLED,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hover_lightens_background() {
        let theme = Theme::Dark;
        let active = primary(&theme, button::Status::Active);
        let hovered = primary(&theme, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn disabled_style_is_status_independent() {
        let theme = Theme::Light;
        let a = disabled(&theme, button::Status::Active);
        let b = disabled(&theme, button::Status::Hovered);
        assert_eq!(a.text_color, b.text_color);
        assert_eq!(a.background, b.background);
    }
}
