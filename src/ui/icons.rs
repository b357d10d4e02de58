// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are monochrome `currentColor` SVGs embedded at compile time via
//! `include_bytes!`; handles are cached using `OnceLock` so the SVG tree is
//! parsed once per icon. Callers tint them through the widget's style.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `chevron_down` not `scroll_hint`).

use iced::widget::svg::{Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(chevron_down, "chevron-down.svg", "Downward chevron.");
define_icon!(github, "github.svg", "GitHub mark.");
define_icon!(linkedin, "linkedin.svg", "LinkedIn mark.");
define_icon!(twitter, "twitter.svg", "Twitter bird.");
define_icon!(mail, "mail.svg", "Envelope.");
define_icon!(map_pin, "map-pin.svg", "Map pin.");
define_icon!(external_link, "external-link.svg", "Box with outgoing arrow.");
define_icon!(cross, "cross.svg", "Dismiss cross.");
define_icon!(download, "download.svg", "Download tray.");
define_icon!(sun, "sun.svg", "Sun (light theme).");
define_icon!(moon, "moon.svg", "Crescent moon (dark theme).");
define_icon!(check_circle, "check-circle.svg", "Circled checkmark.");
define_icon!(alert_triangle, "alert-triangle.svg", "Warning triangle.");
define_icon!(zap, "zap.svg", "Lightning bolt (placeholder art).");

/// Sizes an icon to a square of the given side and tints it.
#[must_use]
pub fn tinted(icon: Svg<'_>, side: f32, color: Color) -> Svg<'_> {
    icon.width(Length::Fixed(side))
        .height(Length::Fixed(side))
        .style(move |_theme: &Theme, _status| iced::widget::svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_assets_are_valid_svg() {
        // Creating each icon parses the embedded bytes into a handle.
        let _ = chevron_down();
        let _ = github();
        let _ = linkedin();
        let _ = twitter();
        let _ = mail();
        let _ = map_pin();
        let _ = external_link();
        let _ = cross();
        let _ = download();
        let _ = sun();
        let _ = moon();
        let _ = check_circle();
        let _ = alert_triangle();
        let _ = zap();
    }
}
