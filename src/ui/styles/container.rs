// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised card surface used by showcase entries and the contact panels.
pub fn card(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Decorative block standing in for a missing project image.
pub fn image_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_400
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Small pill badge for project tags.
pub fn badge(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.strong.color;
    container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Accent-colored badge for featured entries.
pub fn featured_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ACCENT_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Round halo behind contact-info icons.
pub fn icon_halo(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_400
        })),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Toast container with a severity-colored accent border.
pub fn toast(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(bg_color)),
        border: Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
