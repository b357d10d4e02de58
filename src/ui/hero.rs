// SPDX-License-Identifier: MPL-2.0
//! Hero banner region.
//!
//! The banner fills the first viewport and plays its entrance timeline once
//! on mount: title, subtitle, description, action buttons, social icons, and
//! finally the scroll hint, each overlapping the previous step. When the
//! entrance finishes, the scroll hint starts an endless bobbing loop that
//! only stops when the region is torn down.

use crate::content;
use crate::reveal::{Easing, LoopTween, Playback, Step, TargetId, Timeline, Tween, VisualState};
use crate::ui::action_icons;
use crate::ui::design_tokens::{motion, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::time::Instant;

const TITLE: TargetId = TargetId("hero-title");
const SUBTITLE: TargetId = TargetId("hero-subtitle");
const DESCRIPTION: TargetId = TargetId("hero-description");
const ACTIONS: TargetId = TargetId("hero-actions");
const SOCIALS: TargetId = TargetId("hero-socials");
const HINT: TargetId = TargetId("hero-hint");

/// Scroll-hint bob: rest to +10px and back, forever.
const BOB: LoopTween = LoopTween {
    from: VisualState::FINAL,
    to: VisualState {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: motion::BOB_DISTANCE,
        scale: 1.0,
    },
    period: motion::BOB_PERIOD,
    easing: Easing::PowerInOut(2),
};

/// Messages emitted by the hero region.
#[derive(Debug, Clone)]
pub enum Message {
    ViewWork,
    DownloadResume,
    OpenSocial(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ScrollToProjects,
    OpenUrl(&'static str),
}

/// Hero region state: the entrance playback and, once it completes, the
/// scroll-hint loop.
#[derive(Debug, Default)]
pub struct Hero {
    entrance: Option<Playback>,
    bob_started_at: Option<Instant>,
    reduced_motion: bool,
}

impl Hero {
    /// Mounts the region and starts the entrance timeline. With reduced
    /// motion every element sits at its final state and the bob never runs.
    #[must_use]
    pub fn mount(now: Instant, reduced_motion: bool) -> Self {
        Self {
            entrance: (!reduced_motion).then(|| Playback::start(entrance_timeline(), now)),
            bob_started_at: None,
            reduced_motion,
        }
    }

    /// Advances the entrance → loop handover. Called from the animation tick.
    pub fn tick(&mut self, now: Instant) {
        if self.bob_started_at.is_none() {
            if let Some(entrance) = &self.entrance {
                if entrance.is_finished(now) {
                    self.bob_started_at = Some(now);
                }
            }
        }
    }

    /// Whether the region still needs animation ticks. The bob never
    /// finishes, so this stays true for the lifetime of the region unless
    /// motion is reduced.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.reduced_motion && (self.entrance.is_some() || self.bob_started_at.is_some())
    }

    /// Tears the region down, dropping the playback and the loop.
    pub fn unmount(&mut self) {
        self.entrance = None;
        self.bob_started_at = None;
        self.reduced_motion = true;
    }

    fn visual(&self, target: TargetId, member: usize, now: Instant) -> VisualState {
        match &self.entrance {
            Some(entrance) => entrance.sample_or_final(target, member, now),
            None => VisualState::FINAL,
        }
    }

    fn hint_visual(&self, now: Instant) -> VisualState {
        if let Some(started_at) = self.bob_started_at {
            let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
            BOB.sample(elapsed)
        } else {
            self.visual(HINT, 0, now)
        }
    }
}

/// Declared entrance order, with the overlaps expressed as negative offsets
/// against the previous step's scheduled end.
fn entrance_timeline() -> Timeline {
    let slide_lg = VisualState::hidden_below(motion::SLIDE_LG);
    let slide_md = VisualState::hidden_below(motion::SLIDE_MD);
    let pop = VisualState {
        opacity: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 0.9,
    };
    let grow = VisualState {
        opacity: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 0.0,
    };
    let fade = VisualState {
        opacity: 0.0,
        ..VisualState::FINAL
    };

    Timeline::new(vec![
        Step::single(
            TITLE,
            Tween::new(slide_lg, VisualState::FINAL, 1.0, Easing::PowerOut(3)),
            motion::HERO_DELAY,
        ),
        Step::single(
            SUBTITLE,
            Tween::new(slide_md, VisualState::FINAL, 0.8, Easing::PowerOut(3)),
            -0.5,
        ),
        Step::single(
            DESCRIPTION,
            Tween::new(slide_md, VisualState::FINAL, 0.8, Easing::PowerOut(3)),
            -0.4,
        ),
        Step::group(
            ACTIONS,
            Tween::new(pop, VisualState::FINAL, 0.6, Easing::BackOut(1.7)),
            -0.3,
            2,
            motion::STAGGER,
        ),
        Step::group(
            SOCIALS,
            Tween::new(grow, VisualState::FINAL, 0.5, Easing::BackOut(1.7)),
            -0.2,
            content::SOCIAL_LINKS.len(),
            motion::STAGGER,
        ),
        Step::single(
            HINT,
            Tween::new(fade, VisualState::FINAL, 0.6, Easing::PowerOut(3)),
            -0.2,
        ),
    ])
}

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub hero: &'a Hero,
    pub now: Instant,
    /// Current window height; the banner fills exactly one viewport.
    pub viewport_height: f32,
}

/// Process a hero message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ViewWork => Event::ScrollToProjects,
        Message::DownloadResume => Event::OpenUrl(content::RESUME_URL),
        Message::OpenSocial(url) => Event::OpenUrl(url),
    }
}

/// Render the hero banner.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let now = ctx.now;

    let title = reveal_slot(build_title(ctx.hero.visual(TITLE, 0, now)), ctx.hero.visual(TITLE, 0, now));
    let subtitle = {
        let vs = ctx.hero.visual(SUBTITLE, 0, now);
        reveal_slot(build_subtitle(vs), vs)
    };
    let description = {
        let vs = ctx.hero.visual(DESCRIPTION, 0, now);
        reveal_slot(build_description(vs), vs)
    };
    let actions = build_actions(ctx.hero, now);
    let socials = build_socials(ctx.hero, now);
    let hint = {
        let vs = ctx.hero.hint_visual(now);
        reveal_slot(build_hint(vs), vs)
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(description)
        .push(actions)
        .push(socials)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.viewport_height.max(1.0)))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}

fn build_title<'a>(vs: VisualState) -> Element<'a, Message> {
    let size = typography::DISPLAY * vs.scale.max(0.0);
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(content::GREETING)
                .size(size)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, vs)),
                }),
        )
        .push(
            Text::new(content::NAME)
                .size(size)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(palette::PRIMARY_400, vs)),
                }),
        )
        .into()
}

fn build_subtitle<'a>(vs: VisualState) -> Element<'a, Message> {
    Text::new(content::SUBTITLE)
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(faded(palette::ACCENT_500, vs)),
        })
        .into()
}

fn build_description<'a>(vs: VisualState) -> Element<'a, Message> {
    Container::new(
        Text::new(content::DESCRIPTION)
            .size(typography::BODY_LG)
            .align_x(alignment::Horizontal::Center)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, vs)),
            }),
    )
    .max_width(sizing::CONTENT_MAX_WIDTH / 2.0)
    .into()
}

fn build_actions<'a>(hero: &Hero, now: Instant) -> Element<'a, Message> {
    let work_vs = hero.visual(ACTIONS, 0, now);
    let resume_vs = hero.visual(ACTIONS, 1, now);

    let view_work = button(
        Text::new("View My Work").size(typography::BODY * work_vs.scale.max(0.0)),
    )
    .padding(Padding::from([spacing::SM, spacing::LG]))
    .style(styles::button::primary)
    .on_press(Message::ViewWork);

    let resume = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::download(),
                sizing::ICON_SM,
                palette::GRAY_400,
            ))
            .push(Text::new("Download Resume").size(typography::BODY * resume_vs.scale.max(0.0))),
    )
    .padding(Padding::from([spacing::SM, spacing::LG]))
    .style(styles::button::outline)
    .on_press(Message::DownloadResume);

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(reveal_slot(view_work.into(), work_vs))
        .push(reveal_slot(resume.into(), resume_vs))
        .into()
}

fn build_socials<'a>(hero: &Hero, now: Instant) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    for (index, link) in content::SOCIAL_LINKS.iter().enumerate() {
        let vs = hero.visual(SOCIALS, index, now);
        let side = sizing::ICON_MD * vs.scale.max(0.0);
        let icon = icons::tinted(
            action_icons::social(link.label),
            side,
            faded(palette::GRAY_400, vs),
        );
        let social = button(icon)
            .padding(spacing::SM)
            .style(styles::button::social)
            .on_press(Message::OpenSocial(link.url));
        row = row.push(reveal_slot(social.into(), vs));
    }

    row.into()
}

fn build_hint<'a>(vs: VisualState) -> Element<'a, Message> {
    let hint = button(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new("Scroll to explore")
                    .size(typography::CAPTION)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(faded(palette::GRAY_400, vs)),
                    }),
            )
            .push(icons::tinted(
                icons::chevron_down(),
                sizing::ICON_MD,
                faded(palette::GRAY_400, vs),
            )),
    )
    .padding(spacing::XS)
    .style(styles::button::ghost)
    .on_press(Message::ViewWork);

    hint.into()
}

/// Wraps an element so its sampled slide offset displaces it inside the
/// layout without moving siblings.
fn reveal_slot(content: Element<'_, Message>, vs: VisualState) -> Element<'_, Message> {
    Container::new(content)
        .padding(Padding {
            top: vs.offset_y.max(0.0),
            left: vs.offset_x.max(0.0),
            ..Padding::ZERO
        })
        .into()
}

/// Applies the sampled opacity to a color.
fn faded(color: Color, vs: VisualState) -> Color {
    Color {
        a: color.a * vs.opacity.clamp(0.0, 1.0),
        ..color
    }
}
