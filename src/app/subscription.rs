// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two time sources drive the page: a fast animation tick that only runs
//! while a reveal or the scroll-hint loop is in flight, and a slower tick
//! for notification auto-dismiss. Window resizes arrive through the native
//! event stream.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Animation frame interval (~60 Hz).
const TICK_INTERVAL: Duration = Duration::from_millis(16);
/// Notification housekeeping interval.
const NOTIFICATION_TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Routes native window events; only resizes matter to the page layout.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Creates the periodic tick subscriptions. Each timer runs only while it
/// has work, so an idle page with reduced motion schedules nothing.
pub fn create_tick_subscription(
    is_animating: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    let animation = if is_animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    };
    let notification = if has_notifications {
        time::every(NOTIFICATION_TICK_INTERVAL).map(Message::NotificationTick)
    } else {
        Subscription::none()
    };

    Subscription::batch([animation, notification])
}
