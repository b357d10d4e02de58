// SPDX-License-Identifier: MPL-2.0
//! Contact panel: the form, the info column, and the closing blurb.
//!
//! The form holds exactly four fields (name, email, subject, message) and
//! never grows or shrinks. Submitting with name, email, or message empty
//! rejects the submission with a destructive notification and changes
//! nothing; a valid submission acknowledges with a normal notification and
//! resets every field. Nothing is transmitted anywhere: the acknowledgement
//! toast is the entire delivery pipeline.
//!
//! The form column slides in from the left and the info column from the
//! right, each behind its own fire-once trigger.

use crate::content;
use crate::reveal::{Easing, Playback, Registry, Step, TargetId, Timeline, Trigger, Tween, VisualState};
use crate::ui::action_icons;
use crate::ui::design_tokens::{motion, opacity, palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, text, text_editor, text_input, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

const TITLE: TargetId = TargetId("contact-title");
const FORM: TargetId = TargetId("contact-form");
const INFO: TargetId = TargetId("contact-info");

/// Estimated height of the title block above the two columns.
const TITLE_BLOCK_HEIGHT: f32 = 160.0;

/// The four form fields. Fixed and exhaustive: presence checks and reset
/// iterate this exact set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    /// Required fields that are currently empty (after trimming), in display
    /// order. Subject is optional.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }

    /// Restores all four fields to the empty string.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

/// Messages emitted by the contact region.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    OpenLink(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenUrl(&'static str),
    Notify(Notification),
}

/// Contact region state.
#[derive(Debug, Default)]
pub struct Contact {
    form: FormState,
    /// Editor buffer for the multiline message field; mirrored into
    /// `form.message` on every edit.
    message_content: text_editor::Content,
    registry: Registry,
    active: Vec<(TargetId, Playback)>,
    reduced_motion: bool,
}

impl Contact {
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// (Re)registers the section's triggers from the current layout.
    pub fn relayout(&mut self, section_top: f32) {
        let title_top = section_top + spacing::SECTION;
        self.registry.register(Trigger::new(TITLE, title_top));
        let columns_top = title_top + TITLE_BLOCK_HEIGHT;
        self.registry.register(Trigger::new(FORM, columns_top));
        self.registry.register(Trigger::new(INFO, columns_top));
    }

    /// Evaluates pending triggers and starts playbacks for fired targets.
    pub fn evaluate(&mut self, scroll_offset: f32, viewport_height: f32, now: Instant) {
        for target in self.registry.evaluate(scroll_offset, viewport_height) {
            if self.reduced_motion {
                continue;
            }
            self.active
                .push((target, Playback::start(reveal_timeline(target), now)));
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.active.iter().any(|(_, p)| !p.is_finished(now))
    }

    pub fn prune(&mut self, now: Instant) {
        self.active.retain(|(_, p)| !p.is_finished(now));
    }

    /// Synchronous teardown of triggers and playbacks.
    pub fn unmount(&mut self) {
        self.registry.clear();
        self.active.clear();
    }

    /// Processes a contact message and returns the event for the parent.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(name) => {
                self.form.name = name;
                Event::None
            }
            Message::EmailChanged(email) => {
                self.form.email = email;
                Event::None
            }
            Message::SubjectChanged(subject) => {
                self.form.subject = subject;
                Event::None
            }
            Message::MessageEdited(action) => {
                self.message_content.perform(action);
                // The editor buffer carries a trailing newline even when
                // visually empty; presence checks must not count it.
                self.form.message = self
                    .message_content
                    .text()
                    .trim_end_matches('\n')
                    .to_owned();
                Event::None
            }
            Message::Submit => self.submit(),
            Message::OpenLink(url) => Event::OpenUrl(url),
        }
    }

    fn submit(&mut self) -> Event {
        let missing = self.form.missing_fields();
        if missing.is_empty() {
            self.form.reset();
            self.message_content = text_editor::Content::new();
            Event::Notify(
                Notification::normal("Message Sent!").with_description(
                    "Thanks for reaching out. I'll get back to you soon.",
                ),
            )
        } else {
            // Rejected: state is left untouched so nothing typed is lost.
            Event::Notify(
                Notification::destructive("Message Failed")
                    .with_description(format!("Please fill in: {}", missing.join(", "))),
            )
        }
    }

    fn visual(&self, target: TargetId, now: Instant) -> VisualState {
        if let Some((_, playback)) = self.active.iter().find(|(t, _)| *t == target) {
            return playback.sample_or_final(target, 0, now);
        }
        if self.registry.has_fired(target) || self.reduced_motion {
            VisualState::FINAL
        } else {
            VisualState {
                opacity: 0.0,
                ..VisualState::FINAL
            }
        }
    }
}

fn reveal_timeline(target: TargetId) -> Timeline {
    let from = match target {
        FORM => VisualState::hidden_beside(-motion::SLIDE_X),
        INFO => VisualState::hidden_beside(motion::SLIDE_X),
        _ => VisualState::hidden_below(motion::SLIDE_MD),
    };
    Timeline::new(vec![Step::single(
        target,
        Tween::new(from, VisualState::FINAL, 0.8, Easing::PowerOut(3)),
        0.0,
    )])
}

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub contact: &'a Contact,
    pub now: Instant,
}

/// Render the contact section.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title_vs = ctx.contact.visual(TITLE, ctx.now);
    let form_vs = ctx.contact.visual(FORM, ctx.now);
    let info_vs = ctx.contact.visual(INFO, ctx.now);

    let header = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(build_section_title(content::CONTACT_TITLE, title_vs))
        .push(
            Container::new(
                Text::new(content::CONTACT_SUBTITLE)
                    .size(typography::BODY)
                    .align_x(alignment::Horizontal::Center)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(faded(theme.palette().text, title_vs)),
                    }),
            )
            .max_width(sizing::CONTENT_MAX_WIDTH / 2.0),
        );

    let columns = Row::new()
        .spacing(spacing::XL)
        .push(reveal_slot(build_form(ctx.contact, form_vs), form_vs))
        .push(reveal_slot(build_info_column(info_vs), info_vs));

    let section = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(reveal_slot(header.into(), title_vs))
        .push(Container::new(columns).max_width(sizing::CONTENT_MAX_WIDTH));

    Container::new(section)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(Padding {
            top: spacing::SECTION,
            bottom: spacing::SECTION,
            left: spacing::XL,
            right: spacing::XL,
        })
        .into()
}

fn build_section_title<'a>(title: (&'static str, &'static str), vs: VisualState) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(title.0)
                .size(typography::TITLE_LG)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, vs)),
                }),
        )
        .push(
            Text::new(title.1)
                .size(typography::TITLE_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(palette::PRIMARY_400, vs)),
                }),
        )
        .into()
}

fn build_form(contact: &Contact, vs: VisualState) -> Element<'_, Message> {
    let form = &contact.form;

    let name = text_input("Your Name", &form.name)
        .on_input(Message::NameChanged)
        .padding(spacing::SM)
        .size(typography::BODY);

    let email = text_input("Your Email", &form.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::SM)
        .size(typography::BODY);

    let subject = text_input("Subject (optional)", &form.subject)
        .on_input(Message::SubjectChanged)
        .padding(spacing::SM)
        .size(typography::BODY);

    let message = text_editor(&contact.message_content)
        .placeholder("Your Message")
        .on_action(Message::MessageEdited)
        .padding(spacing::SM)
        .size(typography::BODY)
        .height(Length::Fixed(140.0));

    let submit = button(Text::new("Send Message").size(typography::BODY))
        .padding(Padding::from([spacing::SM, spacing::LG]))
        .style(styles::button::primary)
        .on_press(Message::Submit);

    let form_column = Column::new()
        .spacing(spacing::MD)
        .push(build_panel_heading("Send a Message", vs))
        .push(name)
        .push(email)
        .push(subject)
        .push(message)
        .push(submit);

    Container::new(form_column)
        .width(Length::FillPortion(1))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn build_info_column<'a>(vs: VisualState) -> Element<'a, Message> {
    let mut info_list = Column::new().spacing(spacing::MD);
    for info in content::CONTACT_INFO {
        info_list = info_list.push(build_info_row(info, vs));
    }

    let mut socials = Row::new().spacing(spacing::SM);
    for link in content::SOCIAL_LINKS {
        socials = socials.push(
            button(crate::ui::icons::tinted(
                action_icons::social(link.label),
                sizing::ICON_MD,
                faded(palette::GRAY_400, vs),
            ))
            .padding(spacing::SM)
            .style(styles::button::social)
            .on_press(Message::OpenLink(link.url)),
        );
    }

    let blurb = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(
                Text::new(content::CONTACT_BLURB_TITLE)
                    .size(typography::TITLE_SM)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(faded(palette::PRIMARY_400, vs)),
                    }),
            )
            .push(
                Text::new(content::CONTACT_BLURB)
                    .size(typography::BODY)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(faded(
                            Color {
                                a: opacity::MUTED,
                                ..theme.palette().text
                            },
                            vs,
                        )),
                    }),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(styles::container::card);

    Column::new()
        .width(Length::FillPortion(1))
        .spacing(spacing::LG)
        .push(build_panel_heading("Contact Information", vs))
        .push(info_list)
        .push(build_panel_heading("Follow Me", vs))
        .push(socials)
        .push(blurb)
        .into()
}

/// One contact-info row; entries with a URL are clickable.
fn build_info_row<'a>(info: &'a content::ContactInfo, vs: VisualState) -> Element<'a, Message> {
    let icon = Container::new(crate::ui::icons::tinted(
        action_icons::contact(info.label),
        sizing::ICON_SM,
        faded(palette::PRIMARY_400, vs),
    ))
    .padding(spacing::XS)
    .style(styles::container::icon_halo);

    let labels = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(info.label)
                .size(typography::CAPTION)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(palette::GRAY_400, vs)),
                }),
        )
        .push(
            Text::new(info.value)
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, vs)),
                }),
        );

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(labels);

    match info.url {
        Some(url) => button(row)
            .padding(spacing::XXS)
            .style(styles::button::ghost)
            .on_press(Message::OpenLink(url))
            .into(),
        None => Container::new(row).padding(spacing::XXS).into(),
    }
}

fn build_panel_heading<'a>(label: &'static str, vs: VisualState) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::TITLE_MD)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, vs)),
        })
        .into()
}

fn reveal_slot(content: Element<'_, Message>, vs: VisualState) -> Element<'_, Message> {
    Container::new(content)
        .padding(Padding {
            top: vs.offset_y.max(0.0),
            left: vs.offset_x.max(0.0),
            right: (-vs.offset_x).max(0.0),
            ..Padding::ZERO
        })
        .into()
}

fn faded(color: Color, vs: VisualState) -> Color {
    Color {
        a: color.a * vs.opacity.clamp(0.0, 1.0),
        ..color
    }
}
