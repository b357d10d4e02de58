// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The three page regions stack vertically inside one scrollable; the theme
//! toggle and the toast overlay float above it in a `Stack`.

use super::{Message, PAGE_SCROLLABLE};
use crate::ui::contact::{self, Contact};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::hero::{self, Hero};
use crate::ui::icons;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::projects::{self, Projects};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, scrollable, Column, Container, Id, Stack};
use iced::{alignment, Element, Length, Size};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub hero: &'a Hero,
    pub projects: &'a Projects,
    pub contact: &'a Contact,
    pub notifications: &'a Manager,
    pub theme_mode: ThemeMode,
    pub window_size: Size,
    pub now: Instant,
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .width(Length::Fill)
        .push(
            hero::view(hero::ViewContext {
                hero: ctx.hero,
                now: ctx.now,
                viewport_height: ctx.window_size.height,
            })
            .map(Message::Hero),
        )
        .push(
            projects::view(projects::ViewContext {
                projects: ctx.projects,
                now: ctx.now,
            })
            .map(Message::Projects),
        )
        .push(
            contact::view(contact::ViewContext {
                contact: ctx.contact,
                now: ctx.now,
            })
            .map(Message::Contact),
        );

    let scroll = scrollable(page)
        .id(Id::new(PAGE_SCROLLABLE))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::PageScrolled);

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scroll)
        .push(theme_toggle(ctx.theme_mode))
        .push(toasts)
        .into()
}

/// Corner theme toggle. Shows the theme the click switches to.
fn theme_toggle<'a>(theme_mode: ThemeMode) -> Element<'a, Message> {
    let icon = if theme_mode.is_dark() {
        icons::sun()
    } else {
        icons::moon()
    };

    let toggle = button(icons::tinted(icon, sizing::ICON_MD, toggle_tint(theme_mode)))
        .padding(spacing::SM)
        .style(styles::button::social)
        .on_press(Message::ToggleTheme);

    Container::new(toggle)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(spacing::MD)
        .into()
}

fn toggle_tint(theme_mode: ThemeMode) -> iced::Color {
    let scheme = theme_mode.scheme();
    scheme.text_secondary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications;

    #[test]
    fn page_view_renders() {
        let now = Instant::now();
        let hero = Hero::mount(now, true);
        let projects = Projects::new(true);
        let contact = Contact::new(true);
        let manager = notifications::Manager::new();

        let _element = view(ViewContext {
            hero: &hero,
            projects: &projects,
            contact: &contact,
            notifications: &manager,
            theme_mode: ThemeMode::Dark,
            window_size: Size::new(1100.0, 760.0),
            now,
        });
    }
}
