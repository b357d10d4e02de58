// SPDX-License-Identifier: MPL-2.0
//! Project showcase grid.
//!
//! Renders the fixed list of [`content::PROJECTS`] as a two-column card
//! grid. The section title and every card register a fire-once reveal
//! trigger; a card's entrance is additionally delayed by an index stagger so
//! cards revealed together cascade instead of popping in at once.
//!
//! Trigger positions are estimates of page-space layout (the section sits
//! directly below the one-viewport hero). They are re-registered on every
//! relayout, which is safe: registration is idempotent per target and a
//! fired target never re-arms.

use crate::content::{self, Project};
use crate::reveal::{Easing, Playback, Registry, Step, TargetId, Timeline, Trigger, Tween, VisualState};
use crate::ui::design_tokens::{motion, opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

const TITLE: TargetId = TargetId("projects-title");

/// One reveal target per showcase entry. Kept in sync with
/// `content::PROJECTS` by a test below.
const CARD_TARGETS: &[TargetId] = &[
    TargetId("project-0"),
    TargetId("project-1"),
    TargetId("project-2"),
    TargetId("project-3"),
    TargetId("project-4"),
];

/// Estimated height of the title block above the grid.
const TITLE_BLOCK_HEIGHT: f32 = 180.0;
/// Estimated height of one card row, including the row gap.
const CARD_ROW_HEIGHT: f32 = 440.0;
/// Cards per grid row.
const COLUMNS: usize = 2;

/// Messages emitted by the showcase region.
#[derive(Debug, Clone)]
pub enum Message {
    OpenCode(&'static str),
    OpenDemo(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenUrl(&'static str),
}

/// Showcase region state: the trigger registry and the playbacks of targets
/// that have fired.
#[derive(Debug, Default)]
pub struct Projects {
    registry: Registry,
    active: Vec<(TargetId, Playback)>,
    reduced_motion: bool,
}

impl Projects {
    #[must_use]
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            registry: Registry::new(),
            active: Vec::new(),
            reduced_motion,
        }
    }

    /// Estimated page-space height of the whole section, used to place the
    /// section that follows it.
    #[must_use]
    pub fn estimated_height() -> f32 {
        let rows = content::PROJECTS.len().div_ceil(COLUMNS) as f32;
        spacing::SECTION * 2.0 + TITLE_BLOCK_HEIGHT + rows * CARD_ROW_HEIGHT
    }

    /// (Re)registers the section's triggers from the current layout.
    /// `section_top` is the page-space y where the section begins.
    pub fn relayout(&mut self, section_top: f32) {
        self.registry
            .register(Trigger::new(TITLE, section_top + spacing::SECTION));
        let grid_top = section_top + spacing::SECTION + TITLE_BLOCK_HEIGHT;
        for (index, target) in CARD_TARGETS.iter().enumerate() {
            let row = (index / COLUMNS) as f32;
            self.registry
                .register(Trigger::new(*target, grid_top + row * CARD_ROW_HEIGHT));
        }
    }

    /// Evaluates pending triggers and starts a playback for each target that
    /// fired this tick.
    pub fn evaluate(&mut self, scroll_offset: f32, viewport_height: f32, now: Instant) {
        for target in self.registry.evaluate(scroll_offset, viewport_height) {
            if self.reduced_motion {
                continue; // fired state alone is enough; elements just appear
            }
            let timeline = if target == TITLE {
                title_timeline()
            } else {
                let index = CARD_TARGETS.iter().position(|t| *t == target).unwrap_or(0);
                card_timeline(target, index)
            };
            self.active.push((target, Playback::start(timeline, now)));
        }
    }

    /// Whether any reveal is still in flight.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.active.iter().any(|(_, p)| !p.is_finished(now))
    }

    /// Drops finished playbacks; their targets render at final state from
    /// the fired set alone.
    pub fn prune(&mut self, now: Instant) {
        self.active.retain(|(_, p)| !p.is_finished(now));
    }

    /// Synchronous teardown of the region's triggers and playbacks.
    pub fn unmount(&mut self) {
        self.registry.clear();
        self.active.clear();
    }

    fn visual(&self, target: TargetId, now: Instant) -> VisualState {
        if let Some((_, playback)) = self.active.iter().find(|(t, _)| *t == target) {
            return playback.sample_or_final(target, 0, now);
        }
        if self.registry.has_fired(target) || self.reduced_motion {
            VisualState::FINAL
        } else {
            // Not yet revealed: parked at the tween's hidden start.
            VisualState {
                opacity: 0.0,
                ..VisualState::FINAL
            }
        }
    }
}

fn title_timeline() -> Timeline {
    Timeline::new(vec![Step::single(
        TITLE,
        Tween::new(
            VisualState::hidden_below(motion::SLIDE_MD),
            VisualState::FINAL,
            0.8,
            Easing::PowerOut(3),
        ),
        0.0,
    )])
}

fn card_timeline(target: TargetId, index: usize) -> Timeline {
    // The index stagger is expressed as the step's initial delay, so cards
    // fired by the same scroll tick cascade left to right, top to bottom.
    Timeline::new(vec![Step::single(
        target,
        Tween::new(
            VisualState::hidden_below(motion::CARD_LIFT),
            VisualState::FINAL,
            0.8,
            Easing::PowerOut(3),
        ),
        motion::STAGGER * index as f32,
    )])
}

/// Contextual data needed to render the showcase.
pub struct ViewContext<'a> {
    pub projects: &'a Projects,
    pub now: Instant,
}

/// Process a showcase message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenCode(url) | Message::OpenDemo(url) => Event::OpenUrl(url),
    }
}

/// Render the showcase section.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title_vs = ctx.projects.visual(TITLE, ctx.now);

    let header = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(build_section_title(content::PROJECTS_TITLE, title_vs))
        .push(
            Container::new(
                Text::new(content::PROJECTS_SUBTITLE)
                    .size(typography::BODY)
                    .align_x(alignment::Horizontal::Center)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(faded(theme.palette().text, title_vs)),
                    }),
            )
            .max_width(sizing::CONTENT_MAX_WIDTH / 2.0),
        );

    let mut grid = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center);
    for (row_index, pair) in content::PROJECTS.chunks(COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::LG);
        for (col_index, project) in pair.iter().enumerate() {
            let index = row_index * COLUMNS + col_index;
            let target = CARD_TARGETS.get(index).copied().unwrap_or(TITLE);
            let vs = ctx.projects.visual(target, ctx.now);
            row = row.push(build_card(project, vs));
        }
        grid = grid.push(row);
    }

    let section = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(reveal_slot(header.into(), title_vs))
        .push(grid);

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

/// Two-tone section title: plain lead word, accent-colored tail.
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

fn build_card<'a>(project: &'a Project, vs: VisualState) -> Element<'a, Message> {
    let image = build_card_image(project, vs);

    let title = Text::new(project.title)
        .size(typography::TITLE_MD)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, vs)),
        });

    let description = Text::new(project.description)
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(
                Color {
                    a: opacity::MUTED,
                    ..theme.palette().text
                },
                vs,
            )),
        });

    let mut tags = Row::new().spacing(spacing::XS);
    for tag in project.tags {
        tags = tags.push(
            Container::new(Text::new(*tag).size(typography::CAPTION))
                .padding(Padding::from([spacing::XXS, spacing::XS]))
                .style(styles::container::badge),
        );
    }

    let mut card = Column::new()
        .spacing(spacing::SM)
        .push(image)
        .push(title)
        .push(description)
        .push(tags)
        .push(build_card_actions(project));

    if project.featured {
        let badge = Container::new(Text::new("Featured").size(typography::CAPTION))
            .padding(Padding::from([spacing::XXS, spacing::XS]))
            .style(styles::container::featured_badge);
        card = card.push(badge);
    }

    let width = if project.featured {
        sizing::CARD_WIDTH * 1.4
    } else {
        sizing::CARD_WIDTH
    };

    reveal_slot(
        Container::new(card)
            .width(Length::Fixed(width))
            .padding(spacing::MD)
            .style(styles::container::card)
            .into(),
        vs,
    )
}

/// Entries without an image get a decorative placeholder block.
fn build_card_image<'a>(project: &Project, vs: VisualState) -> Element<'a, Message> {
    let inner: Element<'a, Message> = if project.image.is_some() {
        // Image assets ship as decorative gradient blocks named after the
        // entry; the page never depends on raster files being present.
        Text::new(project.title)
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(palette::PRIMARY_200, vs)),
            })
            .into()
    } else {
        icons::tinted(
            icons::zap(),
            sizing::ICON_LG,
            faded(palette::PRIMARY_400, vs),
        )
        .into()
    };

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::image_placeholder)
        .into()
}

fn build_card_actions(project: &Project) -> Element<'_, Message> {
    let mut actions = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if let Some(code) = project.code {
        actions = actions.push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::tinted(
                        icons::github(),
                        sizing::ICON_SM,
                        palette::GRAY_400,
                    ))
                    .push(Text::new("Code").size(typography::BODY)),
            )
            .padding(Padding::from([spacing::XS, spacing::SM]))
            .style(styles::button::outline)
            .on_press(Message::OpenCode(code)),
        );
    } else {
        // Non-interactive placeholder: no on_press, grayed out.
        actions = actions.push(
            button(Text::new("Code").size(typography::BODY))
                .padding(Padding::from([spacing::XS, spacing::SM]))
                .style(styles::button::disabled),
        );
    }

    if let Some(demo) = project.demo {
        actions = actions.push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(icons::tinted(
                        icons::external_link(),
                        sizing::ICON_SM,
                        palette::WHITE,
                    ))
                    .push(Text::new("Demo").size(typography::BODY)),
            )
            .padding(Padding::from([spacing::XS, spacing::SM]))
            .style(styles::button::primary)
            .on_press(Message::OpenDemo(demo)),
        );
    }

    actions.into()
}

fn reveal_slot(content: Element<'_, Message>, vs: VisualState) -> Element<'_, Message> {
    Container::new(content)
        .padding(Padding {
            top: vs.offset_y.max(0.0),
            left: vs.offset_x.max(0.0),
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
