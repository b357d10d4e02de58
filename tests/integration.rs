// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests for the page behavior that spans modules: preference
//! persistence, the scroll-to-reveal pipeline, and the contact form flow.

use folio::config::{self, Config};
use folio::reveal::{Easing, Playback, Registry, Step, TargetId, Timeline, Trigger, Tween, VisualState};
use folio::ui::contact::{self, Contact};
use folio::ui::notifications::{Manager, Notification, Severity};
use folio::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_theme_preference_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let dir_str = dir.path().to_string_lossy().into_owned();

    // First session: user switches to dark and the preference is written.
    let config = Config {
        theme_mode: ThemeMode::Dark,
        reduced_motion: Some(false),
    };
    config::save(&config, Some(&dir_str)).expect("Failed to save config");

    // Second session: the saved preference wins over the default.
    let loaded = config::load(Some(&dir_str)).expect("Failed to load config");
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_missing_config_falls_back_to_system_theme() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let dir_str = dir.path().to_string_lossy().into_owned();

    let loaded = config::load(Some(&dir_str)).expect("Failed to load config");
    assert_eq!(loaded, Config::default());
    assert_eq!(loaded.theme_mode, ThemeMode::System);
}

#[test]
fn test_scroll_reveals_sections_in_page_order() {
    const TITLE: TargetId = TargetId("showcase-title");
    const CARD: TargetId = TargetId("showcase-card");

    let mut registry = Registry::new();
    registry.register(Trigger::new(TITLE, 900.0));
    registry.register(Trigger::new(CARD, 1100.0));

    let viewport_height = 760.0;

    // At the top of the page nothing below the fold fires.
    assert!(registry.evaluate(0.0, viewport_height).is_empty());

    // Scrolling far enough that the title crosses the 80% line fires it,
    // but not the card further down.
    let fired = registry.evaluate(320.0, viewport_height);
    assert_eq!(fired, vec![TITLE]);

    // Deeper scroll fires the card; the title does not re-fire.
    let fired = registry.evaluate(600.0, viewport_height);
    assert_eq!(fired, vec![CARD]);

    // Scrolling back up and down again fires nothing.
    assert!(registry.evaluate(0.0, viewport_height).is_empty());
    assert!(registry.evaluate(600.0, viewport_height).is_empty());
    assert_eq!(registry.pending_count(), 0);
}

#[test]
fn test_fired_trigger_drives_a_full_timeline_playback() {
    const BANNER: TargetId = TargetId("banner");
    const BUTTONS: TargetId = TargetId("buttons");

    let mut registry = Registry::new();
    registry.register(Trigger::new(BANNER, 500.0));

    let fired = registry.evaluate(200.0, 760.0);
    assert_eq!(fired, vec![BANNER]);

    // The fired target starts a staggered two-step timeline.
    let timeline = Timeline::new(vec![
        Step::single(
            BANNER,
            Tween::new(
                VisualState::hidden_below(50.0),
                VisualState::FINAL,
                1.0,
                Easing::PowerOut(3),
            ),
            0.2,
        ),
        Step::group(
            BUTTONS,
            Tween::new(
                VisualState {
                    opacity: 0.0,
                    offset_x: 0.0,
                    offset_y: 0.0,
                    scale: 0.9,
                },
                VisualState::FINAL,
                0.6,
                Easing::BackOut(1.7),
            ),
            -0.3,
            2,
            0.1,
        ),
    ]);
    let total = timeline.total_duration();
    let start = Instant::now();
    let playback = Playback::start(timeline, start);

    // Before its delay the banner sits in the hidden state.
    let early = playback
        .sample(BANNER, 0, start + Duration::from_millis(100))
        .expect("banner is in the timeline");
    assert_eq!(early.opacity, 0.0);
    assert_eq!(early.offset_y, 50.0);

    // Mid-flight the banner is partially revealed and rising.
    let mid = playback
        .sample(BANNER, 0, start + Duration::from_millis(700))
        .expect("banner is in the timeline");
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    assert!(mid.offset_y < 50.0);

    // The second button trails the first.
    let buttons_at = start + Duration::from_millis(1000);
    let first = playback
        .sample(BUTTONS, 0, buttons_at)
        .expect("buttons are in the timeline");
    let second = playback
        .sample(BUTTONS, 1, buttons_at)
        .expect("buttons are in the timeline");
    assert!(first.opacity >= second.opacity);

    // Past the total duration everything rests at final.
    let done = start + Duration::from_secs_f32(total + 0.1);
    assert!(playback.is_finished(done));
    assert_eq!(
        playback.sample(BANNER, 0, done),
        Some(VisualState::FINAL)
    );
    assert_eq!(
        playback.sample(BUTTONS, 1, done),
        Some(VisualState::FINAL)
    );
}

#[test]
fn test_contact_submit_flow_produces_notifications() {
    let mut contact = Contact::new(true);

    // Submitting the empty form reports every required field.
    let event = contact.update(contact::Message::Submit);
    let notification = match event {
        contact::Event::Notify(n) => n,
        other => panic!("expected a notification, got {other:?}"),
    };
    assert_eq!(notification.severity(), Severity::Destructive);
    let description = notification.description().unwrap_or_default();
    assert!(description.contains("name"));
    assert!(description.contains("email"));
    assert!(description.contains("message"));

    // Filling the required fields turns the next submit into a success and
    // clears the form.
    let _ = contact.update(contact::Message::NameChanged("Ada Lovelace".into()));
    let _ = contact.update(contact::Message::EmailChanged("ada@example.com".into()));
    let _ = contact.update(contact::Message::MessageEdited(
        iced::widget::text_editor::Action::Edit(iced::widget::text_editor::Edit::Paste(
            std::sync::Arc::new("Let's collaborate.".to_string()),
        )),
    ));
    let event = contact.update(contact::Message::Submit);
    let notification = match event {
        contact::Event::Notify(n) => n,
        other => panic!("expected a notification, got {other:?}"),
    };
    assert_eq!(notification.severity(), Severity::Normal);
    assert!(contact.form().name.is_empty());
    assert!(contact.form().message.is_empty());

    // Both toasts fit in the visible set together.
    let mut manager = Manager::new();
    manager.push(Notification::destructive("Message Failed"));
    manager.push(notification);
    assert_eq!(manager.visible_count(), 2);
    assert_eq!(manager.queued_count(), 0);
}

#[test]
fn test_notification_overflow_queues_and_promotes() {
    let mut manager = Manager::new();
    let ids: Vec<_> = (0..5)
        .map(|i| {
            let notification = Notification::normal(format!("Toast {i}"));
            let id = notification.id();
            manager.push(notification);
            id
        })
        .collect();

    assert_eq!(manager.visible_count(), 3);
    assert_eq!(manager.queued_count(), 2);

    // Dismissing a visible toast promotes the oldest queued one.
    assert!(manager.dismiss(ids[0]));
    assert_eq!(manager.visible_count(), 3);
    assert_eq!(manager.queued_count(), 1);
}
