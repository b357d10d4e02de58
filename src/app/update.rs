// SPDX-License-Identifier: MPL-2.0
//! Update handling for the application.
//!
//! Region events are translated into side effects here: scroll tasks,
//! external link opening, notification toasts, and config persistence.

use super::{App, Message, PAGE_SCROLLABLE};
use crate::config;
use crate::ui::contact;
use crate::ui::hero;
use crate::ui::notifications::Notification;
use crate::ui::projects;
use iced::widget::operation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::Id;
use iced::Task;
use std::time::Instant;

/// Processes one top-level message.
pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Hero(hero_message) => match hero::update(&hero_message) {
            hero::Event::ScrollToProjects => scroll_to_projects(app),
            hero::Event::OpenUrl(url) => open_external(app, url),
        },
        Message::Projects(projects_message) => match projects::update(&projects_message) {
            projects::Event::OpenUrl(url) => open_external(app, url),
        },
        Message::Contact(contact_message) => match app.contact.update(contact_message) {
            contact::Event::None => Task::none(),
            contact::Event::OpenUrl(url) => open_external(app, url),
            contact::Event::Notify(notification) => {
                app.notifications.push(notification);
                Task::none()
            }
        },
        Message::Notification(notification_message) => {
            app.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::PageScrolled(viewport) => {
            app.scroll_offset = viewport.absolute_offset().y;
            let now = Instant::now();
            app.projects
                .evaluate(app.scroll_offset, viewport.bounds().height, now);
            app.contact
                .evaluate(app.scroll_offset, viewport.bounds().height, now);
            Task::none()
        }
        Message::WindowResized(size) => {
            app.window_size = size;
            app.relayout_sections();
            app.evaluate_triggers(Instant::now());
            Task::none()
        }
        Message::ToggleTheme => {
            app.theme_mode = app.theme_mode.toggled();
            let config = config::Config {
                theme_mode: app.theme_mode,
                reduced_motion: Some(app.reduced_motion),
            };
            if config::save(&config, app.config_dir.as_deref()).is_err() {
                app.notifications.push(
                    Notification::destructive("Settings Not Saved")
                        .with_description("The theme preference could not be written to disk."),
                );
            }
            Task::none()
        }
        Message::Tick(now) => {
            app.hero.tick(now);
            app.projects.prune(now);
            app.contact.prune(now);
            // Initial-viewport reveals and programmatic scrolls both land
            // here without a scroll event.
            app.evaluate_triggers(now);
            Task::none()
        }
        Message::NotificationTick(_now) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

/// Scrolls the page to the top of the showcase section (one viewport down).
fn scroll_to_projects(app: &mut App) -> Task<Message> {
    app.scroll_offset = app.window_size.height;
    app.evaluate_triggers(Instant::now());
    operation::scroll_to(
        Id::new(PAGE_SCROLLABLE),
        AbsoluteOffset {
            x: 0.0,
            y: app.window_size.height,
        },
    )
}

/// Opens a link in the system browser. Out-of-process opening never hands
/// the target page a handle back to this one.
fn open_external(app: &mut App, url: &str) -> Task<Message> {
    if open::that_detached(url).is_err() {
        app.notifications.push(
            Notification::destructive("Couldn't Open Link")
                .with_description("No system handler accepted the URL."),
        );
    }
    Task::none()
}
