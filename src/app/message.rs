// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact;
use crate::ui::hero;
use crate::ui::notifications;
use crate::ui::projects;
use iced::widget::scrollable;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level region messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Hero(hero::Message),
    Projects(projects::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved; carries the full viewport so triggers can
    /// be evaluated against both offset and height.
    PageScrolled(scrollable::Viewport),
    /// The window was resized; section layout estimates must be refreshed.
    WindowResized(Size),
    /// The corner theme toggle was clicked.
    ToggleTheme,
    /// Animation tick (~60 Hz while anything is in flight).
    Tick(Instant),
    /// Slow tick driving notification auto-dismiss.
    NotificationTick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Skip entrance animations, rendering everything at its final state.
    pub reduced_motion: bool,
}
