// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Routine feedback (brand-colored accent, 4s duration).
    #[default]
    Normal,
    /// Something went wrong and input was rejected (red, 6s duration).
    Destructive,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Normal => palette::SUCCESS_500,
            Severity::Destructive => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Duration {
        match self {
            Severity::Normal => Duration::from_secs(4),
            Severity::Destructive => Duration::from_secs(6),
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines color and dismiss timing).
    severity: Severity,
    /// Short headline shown in bold.
    title: String,
    /// Optional longer body line under the title.
    description: Option<String>,
    /// When this notification was created.
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and title.
    pub fn new(severity: Severity, title: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title: title.into(),
            description: None,
            created_at: Instant::now(),
        }
    }

    /// Creates a normal-severity notification.
    pub fn normal(title: impl Into<String>) -> Self {
        Self::new(Severity::Normal, title)
    }

    /// Creates a destructive-severity notification.
    pub fn destructive(title: impl Into<String>) -> Self {
        Self::new(Severity::Destructive, title)
    }

    /// Adds a description line under the title.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the headline text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the optional body text.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether this notification has outlived its display window.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.age() >= self.severity.auto_dismiss_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::normal("test");
        let n2 = Notification::normal("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Normal.color(), Severity::Destructive.color());
    }

    #[test]
    fn destructive_lingers_longer_than_normal() {
        assert!(
            Severity::Destructive.auto_dismiss_duration()
                > Severity::Normal.auto_dismiss_duration()
        );
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification =
            Notification::destructive("Message Failed").with_description("Name is required");

        assert_eq!(notification.severity(), Severity::Destructive);
        assert_eq!(notification.title(), "Message Failed");
        assert_eq!(notification.description(), Some("Name is required"));
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::normal("").severity(), Severity::Normal);
        assert_eq!(
            Notification::destructive("").severity(),
            Severity::Destructive
        );
    }

    #[test]
    fn fresh_notification_does_not_auto_dismiss() {
        let notification = Notification::normal("test");
        assert!(!notification.should_auto_dismiss());
    }
}
