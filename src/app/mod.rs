// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page regions.
//!
//! The `App` struct wires the hero, showcase, and contact regions into one
//! scrollable page and translates their events into side effects: scroll
//! tasks, external link opening, notification toasts, and theme persistence.
//! This file keeps policy decisions (window sizing, when triggers are
//! evaluated, what persists) close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::content;
use crate::ui::contact::Contact;
use crate::ui::hero::Hero;
use crate::ui::notifications;
use crate::ui::projects::Projects;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Id of the page scrollable, shared by the view and the scroll tasks.
pub const PAGE_SCROLLABLE: &str = "portfolio-page";

/// Root Iced application state bridging the page regions, the notification
/// sink, and persisted preferences.
#[derive(Debug)]
pub struct App {
    hero: Hero,
    projects: Projects,
    contact: Contact,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    reduced_motion: bool,
    config_dir: Option<String>,
    window_size: Size,
    /// Current vertical offset of the page scrollable.
    scroll_offset: f32,
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted preferences and mounts
    /// the page regions.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load(flags.config_dir.as_deref()).unwrap_or_default();
        let reduced_motion = flags.reduced_motion || config.reduced_motion.unwrap_or(false);
        let now = Instant::now();

        let mut app = App {
            hero: Hero::mount(now, reduced_motion),
            projects: Projects::new(reduced_motion),
            contact: Contact::new(reduced_motion),
            notifications: notifications::Manager::new(),
            theme_mode: config.theme_mode,
            reduced_motion,
            config_dir: flags.config_dir,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            scroll_offset: 0.0,
        };
        app.relayout_sections();
        // Initial tick: anything already inside the first viewport reveals
        // without waiting for a scroll.
        app.evaluate_triggers(now);

        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("{} — Portfolio", content::NAME)
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.is_animating(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            hero: &self.hero,
            projects: &self.projects,
            contact: &self.contact,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
            window_size: self.window_size,
            now: Instant::now(),
        })
    }

    /// Whether any region still needs animation ticks. The scroll-hint loop
    /// keeps this true for the lifetime of the page unless motion is reduced.
    fn is_animating(&self) -> bool {
        let now = Instant::now();
        self.hero.is_animating()
            || self.projects.is_animating(now)
            || self.contact.is_animating(now)
    }

    /// Recomputes section layout estimates and re-registers their triggers.
    /// Safe to call on every resize: registration is idempotent per target.
    fn relayout_sections(&mut self) {
        let hero_height = self.window_size.height;
        self.projects.relayout(hero_height);
        self.contact
            .relayout(hero_height + Projects::estimated_height());
    }

    /// Evaluates every region's pending triggers against the current scroll
    /// position, in registration order.
    fn evaluate_triggers(&mut self, now: Instant) {
        let viewport_height = self.window_size.height;
        self.projects
            .evaluate(self.scroll_offset, viewport_height, now);
        self.contact
            .evaluate(self.scroll_offset, viewport_height, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::contact;
    use crate::ui::hero;
    use crate::ui::notifications::Severity;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn app_with_temp_config() -> (App, tempfile::TempDir) {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
            reduced_motion: false,
        };
        let (app, _task) = App::new(flags);
        (app, temp_dir)
    }

    #[test]
    fn new_app_starts_at_page_top() {
        let (app, _dir) = app_with_temp_config();
        assert_eq!(app.scroll_offset, 0.0);
        assert!(app.is_animating());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn reduced_motion_flag_overrides_config() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
            reduced_motion: true,
        };
        let (app, _task) = App::new(flags);
        assert!(app.reduced_motion);
        assert!(!app.is_animating());
    }

    #[test]
    fn theme_toggle_flips_and_persists() {
        let (mut app, dir) = app_with_temp_config();
        let before = app.theme_mode;

        let _ = app.update(Message::ToggleTheme);

        assert_ne!(app.theme_mode, before);
        assert!(matches!(
            app.theme_mode,
            ThemeMode::Light | ThemeMode::Dark
        ));
        let saved = config::load(Some(&dir.path().to_string_lossy()))
            .expect("config should load");
        assert_eq!(saved.theme_mode, app.theme_mode);
    }

    #[test]
    fn valid_contact_submit_pushes_a_toast() {
        let (mut app, _dir) = app_with_temp_config();
        let _ = app.update(Message::Contact(contact::Message::NameChanged("Ada".into())));
        let _ = app.update(Message::Contact(contact::Message::EmailChanged(
            "ada@example.com".into(),
        )));
        // The message field normally flows through the editor; drive the
        // validation path directly through a submit with it still empty.
        let _ = app.update(Message::Contact(contact::Message::Submit));

        assert_eq!(app.notifications.visible_count(), 1);
        let severity = app
            .notifications
            .visible()
            .next()
            .map(crate::ui::notifications::Notification::severity);
        assert_eq!(severity, Some(Severity::Destructive));
    }

    #[test]
    fn window_resize_updates_layout_and_viewport() {
        let (mut app, _dir) = app_with_temp_config();
        let _ = app.update(Message::WindowResized(Size::new(900.0, 1200.0)));
        assert_eq!(app.window_size.height, 1200.0);
    }

    #[test]
    fn hero_scroll_event_routes_to_task() {
        let (mut app, _dir) = app_with_temp_config();
        // Just exercise the path; the task itself runs inside the runtime.
        let _ = app.update(Message::Hero(hero::Message::ViewWork));
    }

    #[test]
    fn title_names_the_owner() {
        let (app, _dir) = app_with_temp_config();
        assert!(app.title().contains(content::NAME));
    }
}
