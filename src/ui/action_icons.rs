// SPDX-License-Identifier: MPL-2.0
//! Semantic action-to-icon mapping.
//!
//! [`icons`](crate::ui::icons) names icons by appearance; this module maps
//! page concepts (a social network, a contact channel) to the right visual
//! so the section views don't hardcode the pairing.

use crate::ui::icons;
use iced::widget::svg::Svg;

/// Icon for a social-link label. Unknown networks fall back to the generic
/// outgoing-link icon.
#[must_use]
pub fn social(label: &str) -> Svg<'static> {
    match label {
        "GitHub" => icons::github(),
        "LinkedIn" => icons::linkedin(),
        "Twitter" => icons::twitter(),
        _ => icons::external_link(),
    }
}

/// Icon for a contact-info row.
#[must_use]
pub fn contact(label: &str) -> Svg<'static> {
    match label {
        "Email" => icons::mail(),
        "LinkedIn" => icons::linkedin(),
        "Location" => icons::map_pin(),
        _ => icons::external_link(),
    }
}
