// SPDX-License-Identifier: MPL-2.0
//! Gallery component: main image, previous/next overlay, position counter
//! and the scrollable thumbnail strip.
//!
//! The [`GalleryController`] owns the selection. Every change it reports is
//! turned into a scroll of the strip that brings the selected thumbnail to
//! the middle, animated by [`SmoothScroll`]. The keyboard listener and the
//! animation tick are subscriptions declared only while they are needed.

use crate::app::config::{GalleryConfig, STRIP_PADDING, SCROLL_TICK_MS, THUMBNAIL_SPACING};
use crate::domain::ModelSlug;
use crate::gallery::{keys, ChangeCause, GalleryController, GalleryKey, SelectionChanged};
use crate::gallery::{SmoothScroll, StripGeometry};
use crate::i18n::fluent::I18n;
use crate::media::{CachedImage, ImageCache};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, RelativeOffset, Scrollbar, Viewport};
use iced::widget::{
    button, image, operation, Column, Container, Id, Row, Scrollable, Space, Stack, Text,
};
use iced::{alignment, event, time, window, ContentFit, Element, Length, Padding, Subscription, Task};
use std::time::{Duration, Instant};

/// Identifier of the thumbnail strip scrollable.
pub const STRIP_SCROLLABLE_ID: &str = "gallery-thumbnail-strip";

/// Strip width assumed before the window size is known.
const FALLBACK_STRIP_WIDTH: f32 = 800.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Next,
    Previous,
    Select(usize),
    ScrollLeft,
    ScrollRight,
    StripScrolled { width: f32, offset: f32 },
    ScrollTick(Instant),
}

/// What the parent should do after a gallery update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SelectionChanged(SelectionChanged),
}

/// Layout and animation parameters taken from `[gallery]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub thumbnail_width: f32,
    pub scroll_step: f32,
    pub smooth_scroll: Duration,
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self {
            thumbnail_width: config.thumbnail_width(),
            scroll_step: config.scroll_step_px(),
            smooth_scroll: config.smooth_scroll(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&GalleryConfig::default())
    }
}

/// Data the gallery renders but does not own.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cache: &'a ImageCache,
    /// Resolved URL of every image, in gallery order.
    pub image_urls: &'a [String],
}

#[derive(Debug, Clone)]
pub struct State {
    controller: GalleryController,
    scroll: SmoothScroll,
    geometry: StripGeometry,
    scroll_step: f32,
    /// Last width reported by the strip itself.
    strip_width: Option<f32>,
    window_width: Option<f32>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl State {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            controller: GalleryController::new(),
            scroll: SmoothScroll::new(settings.smooth_scroll),
            geometry: StripGeometry::new(settings.thumbnail_width, THUMBNAIL_SPACING, STRIP_PADDING),
            scroll_step: settings.scroll_step,
            strip_width: None,
            window_width: None,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &GalleryController {
        &self.controller
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.controller.selected_index()
    }

    /// Strip scroll offset the gallery is at or heading to.
    #[must_use]
    pub fn strip_target(&self) -> f32 {
        self.scroll.target()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    /// Whether the gallery has images to show. Keyboard navigation exists
    /// only while this holds.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.controller.is_empty()
    }

    pub fn set_window_width(&mut self, width: f32) {
        self.window_width = Some(width);
    }

    fn strip_width(&self) -> f32 {
        self.strip_width
            .or(self.window_width)
            .unwrap_or(FALLBACK_STRIP_WIDTH)
    }

    /// Forgets the mounted model. The next [`show_model`](Self::show_model)
    /// starts from the first image, even for the same slug.
    pub fn unmount(&mut self) {
        self.controller = GalleryController::new();
        self.scroll.jump_to(0.0);
    }

    /// Adopts the image list of `model`.
    ///
    /// A different model resets the selection to the first image and snaps
    /// the strip back to the start; a refetch of the same model keeps the
    /// selection when it is still in range.
    pub fn show_model(&mut self, model: &ModelSlug, count: usize) -> (Effect, Task<Message>) {
        match self.controller.on_model_changed(model, count) {
            Some(change) if change.cause == ChangeCause::ModelReset => {
                self.scroll.jump_to(0.0);
                (Effect::SelectionChanged(change), self.snap_strip(0.0))
            }
            Some(change) => {
                let task = self.scroll_into_view(change.current, Instant::now());
                (Effect::SelectionChanged(change), task)
            }
            None => (Effect::None, Task::none()),
        }
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        self.update_at(message, Instant::now())
    }

    /// [`update`](Self::update) with an explicit clock, for tests.
    pub fn update_at(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        match message {
            Message::Next => {
                let change = self.controller.select_next();
                self.apply(change, now)
            }
            Message::Previous => {
                let change = self.controller.select_previous();
                self.apply(change, now)
            }
            Message::Select(index) => {
                let change = self.controller.select_index(index);
                self.apply(change, now)
            }
            Message::ScrollLeft => (Effect::None, self.step_strip(-self.scroll_step, now)),
            Message::ScrollRight => (Effect::None, self.step_strip(self.scroll_step, now)),
            Message::StripScrolled { width, offset } => {
                if width > 0.0 {
                    self.strip_width = Some(width);
                }
                self.scroll.observe(offset);
                (Effect::None, Task::none())
            }
            Message::ScrollTick(at) => match self.scroll.tick(at) {
                Some(offset) => (Effect::None, self.snap_strip(offset)),
                None => (Effect::None, Task::none()),
            },
        }
    }

    fn apply(&mut self, change: Option<SelectionChanged>, now: Instant) -> (Effect, Task<Message>) {
        match change {
            Some(change) => {
                let task = self.scroll_into_view(change.current, now);
                (Effect::SelectionChanged(change), task)
            }
            None => (Effect::None, Task::none()),
        }
    }

    fn scroll_into_view(&mut self, index: usize, now: Instant) -> Task<Message> {
        let target = self
            .geometry
            .centered_offset(index, self.controller.len(), self.strip_width());
        self.animate(target, now)
    }

    fn step_strip(&mut self, delta: f32, now: Instant) -> Task<Message> {
        if !self.is_mounted() {
            return Task::none();
        }
        let target = self.geometry.stepped_offset(
            self.scroll.target(),
            delta,
            self.controller.len(),
            self.strip_width(),
        );
        self.animate(target, now)
    }

    fn animate(&mut self, target: f32, now: Instant) -> Task<Message> {
        match self.scroll.animate_to(target, now) {
            Some(offset) => self.snap_strip(offset),
            // the tick subscription drives the rest
            None => Task::none(),
        }
    }

    fn snap_strip(&self, offset: f32) -> Task<Message> {
        let max = self
            .geometry
            .max_offset(self.controller.len(), self.strip_width());
        let x = if max > 0.0 { (offset / max).clamp(0.0, 1.0) } else { 0.0 };
        operation::snap_to(Id::new(STRIP_SCROLLABLE_ID), RelativeOffset { x, y: 0.0 })
    }

    /// Keyboard navigation while mounted, frame ticks while animating.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.is_mounted() {
            return Subscription::none();
        }
        let keyboard = event::listen_with(key_message);
        let tick = if self.scroll.is_animating() {
            time::every(Duration::from_millis(SCROLL_TICK_MS)).map(Message::ScrollTick)
        } else {
            Subscription::none()
        };
        Subscription::batch([keyboard, tick])
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        if !self.is_mounted() {
            return placeholder(ctx.i18n.tr("gallery-empty"), Length::Fixed(sizing::MAIN_IMAGE_HEIGHT));
        }

        Column::new()
            .spacing(spacing::XS)
            .push(self.view_main_image(&ctx))
            .push(self.view_strip(&ctx))
            .into()
    }

    fn view_main_image<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let index = self.controller.selected_index();
        let picture: Element<'a, Message> = match ctx
            .image_urls
            .get(index)
            .and_then(|url| ctx.cache.peek(url))
        {
            Some(CachedImage::Ready(handle)) => image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            Some(CachedImage::Failed) => {
                placeholder(ctx.i18n.tr("gallery-image-unavailable"), Length::Fill)
            }
            Some(CachedImage::Loading) | None => {
                placeholder(ctx.i18n.tr("gallery-image-loading"), Length::Fill)
            }
        };

        let stage = Container::new(picture)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT))
            .style(styles::container::stage);

        let mut stack = Stack::new().push(stage);

        if self.controller.len() > 1 {
            let previous = nav_button("◀", Message::Previous);
            let next = nav_button("▶", Message::Next);
            let arrows = Row::new()
                .align_y(alignment::Vertical::Center)
                .push(previous)
                .push(Space::new().width(Length::Fill))
                .push(next)
                .padding(spacing::SM)
                .height(Length::Fill);
            stack = stack.push(arrows);
        }

        if let Some((current, total)) = self.controller.position() {
            let label = ctx.i18n.tr_with_args(
                "gallery-position",
                &[("current", &current.to_string()), ("total", &total.to_string())],
            );
            let badge = Container::new(Text::new(label).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::badge);
            stack = stack.push(
                Container::new(badge)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Bottom)
                    .padding(spacing::SM),
            );
        }

        stack.height(Length::Fixed(sizing::MAIN_IMAGE_HEIGHT)).into()
    }

    fn view_strip<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let width = self.geometry.thumbnail_width;
        let selected = self.controller.selected_index();

        let thumbnails = ctx.image_urls.iter().enumerate().map(|(index, url)| {
            let content: Element<'a, Message> = match ctx.cache.handle(url) {
                Some(handle) => image(handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(width))
                    .into(),
                None => Space::new()
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(width))
                    .into(),
            };
            button(content)
                .padding(0)
                .on_press(Message::Select(index))
                .style(styles::button::thumbnail(index == selected))
                .into()
        });

        let row = Row::with_children(thumbnails)
            .spacing(self.geometry.spacing)
            .padding(Padding::from([spacing::XS, self.geometry.padding]));

        let strip = Scrollable::new(row)
            .id(Id::new(STRIP_SCROLLABLE_ID))
            .width(Length::Fill)
            .direction(Direction::Horizontal(
                Scrollbar::new().width(sizing::STRIP_SCROLLBAR).scroller_width(sizing::STRIP_SCROLLBAR),
            ))
            .on_scroll(|viewport: Viewport| Message::StripScrolled {
                width: viewport.bounds().width,
                offset: viewport.absolute_offset().x,
            });

        let strip_row = Row::new()
            .align_y(alignment::Vertical::Center)
            .spacing(spacing::XXS)
            .push(strip_button("‹", Message::ScrollLeft, width))
            .push(strip)
            .push(strip_button("›", Message::ScrollRight, width));

        Container::new(strip_row)
            .width(Length::Fill)
            .style(styles::container::stage)
            .into()
    }
}

/// Maps uncaptured ArrowLeft/ArrowRight presses to the same messages as the
/// overlay buttons.
pub fn key_message(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    keys::from_event(&event, status).map(|key| match key {
        GalleryKey::Previous => Message::Previous,
        GalleryKey::Next => Message::Next,
    })
}

fn nav_button(glyph: &'static str, message: Message) -> Element<'static, Message> {
    button(
        Container::new(Text::new(glyph).size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .on_press(message)
    .style(styles::button::overlay)
    .into()
}

fn strip_button(glyph: &'static str, message: Message, height: f32) -> Element<'static, Message> {
    button(Container::new(Text::new(glyph).size(typography::TITLE_SM)).center(Length::Fill))
        .width(Length::Fixed(sizing::STRIP_BUTTON_WIDTH))
        .height(Length::Fixed(height))
        .on_press(message)
        .style(styles::button::subtle)
        .into()
}

fn placeholder<'a>(label: String, height: Length) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::stage)
        .into()
}
