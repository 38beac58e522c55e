// SPDX-License-Identifier: MPL-2.0
//! Library list screen.
//!
//! Lists the models known to the backend with their cover thumbnail. Opening
//! an entry switches to the detail screen; the refresh button asks the
//! backend to rescan its folders and then reloads the list.

use crate::api::BackendUrl;
use crate::domain::{ModelSlug, ModelSummary};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::{CachedImage, ImageCache};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, scrollable, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cache: &'a ImageCache,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(usize),
    Refresh,
    Reload,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Open(ModelSlug),
    Refresh,
    Reload,
}

#[derive(Debug, Clone, Default)]
enum Load {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<ModelSummary>),
    Failed(Error),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    load: Load,
    /// Resolved cover URL per summary.
    thumbnail_urls: Vec<Option<String>>,
    refreshing: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn models(&self) -> &[ModelSummary] {
        match &self.load {
            Load::Loaded(models) => models,
            _ => &[],
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load, Load::Loading)
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn begin_loading(&mut self) {
        self.load = Load::Loading;
    }

    pub fn set_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
    }

    /// Applies the result of `GET /api/models/list`.
    pub fn finish_loading(&mut self, result: Result<Vec<ModelSummary>>, backend: &BackendUrl) {
        match result {
            Ok(mut models) => {
                models.sort_by_cached_key(|m| m.title.to_lowercase());
                self.thumbnail_urls = models
                    .iter()
                    .map(|m| {
                        m.thumbnail
                            .as_deref()
                            .and_then(|path| backend.asset(path).ok())
                            .map(|url| url.to_string())
                    })
                    .collect();
                tracing::info!(count = models.len(), "model list loaded");
                self.load = Load::Loaded(models);
            }
            Err(error) => {
                tracing::warn!(%error, "model list fetch failed");
                self.thumbnail_urls.clear();
                self.load = Load::Failed(error);
            }
        }
    }

    /// Cover images the list wants decoded.
    pub fn wanted_images(&self) -> impl Iterator<Item = &str> {
        self.thumbnail_urls.iter().flatten().map(String::as_str)
    }

    #[must_use]
    pub fn update(&self, message: &Message) -> Event {
        match message {
            Message::Open(index) => self
                .models()
                .get(*index)
                .map_or(Event::None, |summary| Event::Open(summary.slug())),
            Message::Refresh if self.refreshing => Event::None,
            Message::Refresh => Event::Refresh,
            Message::Reload => Event::Reload,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let refresh_label = if self.refreshing {
            ctx.i18n.tr("library-refreshing")
        } else {
            ctx.i18n.tr("library-refresh")
        };
        let refresh = button(Text::new(refresh_label).size(typography::BODY))
            .on_press_maybe((!self.refreshing).then_some(Message::Refresh))
            .style(styles::button::primary);

        let header = Row::new()
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("library-title")).size(typography::TITLE_LG))
            .push(Space::new().width(Length::Fill))
            .push(refresh);

        let body: Element<'a, Message> = match &self.load {
            Load::Idle | Load::Loading => status(Text::new(ctx.i18n.tr("library-loading")).into()),
            Load::Failed(_) => status(
                Column::new()
                    .spacing(spacing::SM)
                    .align_x(Horizontal::Center)
                    .push(Text::new(ctx.i18n.tr("library-load-failed")))
                    .push(
                        button(Text::new(ctx.i18n.tr("library-retry")))
                            .on_press(Message::Reload)
                            .style(styles::button::subtle),
                    )
                    .into(),
            ),
            Load::Loaded(models) if models.is_empty() => {
                status(Text::new(ctx.i18n.tr("library-empty")).into())
            }
            Load::Loaded(models) => {
                let rows = models
                    .iter()
                    .enumerate()
                    .map(|(index, summary)| self.view_row(&ctx, index, summary));
                scrollable(Column::with_children(rows).spacing(spacing::XS))
                    .height(Length::Fill)
                    .into()
            }
        };

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(header)
            .push(body)
            .into()
    }

    fn view_row<'a>(
        &'a self,
        ctx: &ViewContext<'a>,
        index: usize,
        summary: &'a ModelSummary,
    ) -> Element<'a, Message> {
        let cover: Element<'a, Message> = match self
            .thumbnail_urls
            .get(index)
            .and_then(Option::as_deref)
            .and_then(|url| ctx.cache.peek(url))
        {
            Some(CachedImage::Ready(handle)) => image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fixed(sizing::LIBRARY_THUMBNAIL))
                .height(Length::Fixed(sizing::LIBRARY_THUMBNAIL))
                .into(),
            _ => Container::new(Space::new())
                .width(Length::Fixed(sizing::LIBRARY_THUMBNAIL))
                .height(Length::Fixed(sizing::LIBRARY_THUMBNAIL))
                .style(styles::container::stage)
                .into(),
        };

        let mut text = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(Text::new(summary.title.as_str()).size(typography::TITLE_SM));
        if let Some(author) = summary.author.as_deref().filter(|a| !a.is_empty()) {
            text = text.push(
                Text::new(ctx.i18n.tr_with_args("library-by-author", &[("author", author)]))
                    .size(typography::BODY_SM),
            );
        }

        let open = button(Text::new(ctx.i18n.tr("library-open")).size(typography::BODY))
            .on_press(Message::Open(index))
            .style(styles::button::subtle);

        Container::new(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(cover)
                .push(text)
                .push(open),
        )
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
    }
}

fn status(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, title: &str) -> ModelSummary {
        ModelSummary {
            name: name.into(),
            title: title.into(),
            author: None,
            thumbnail: Some(format!("3d/{name}/cover.png")),
        }
    }

    fn loaded() -> State {
        let mut state = State::new();
        state.begin_loading();
        let backend = BackendUrl::parse("http://localhost:51100").expect("valid base");
        state.finish_loading(
            Ok(vec![summary("cube", "Calibration cube"), summary("benchy", "benchy")]),
            &backend,
        );
        state
    }

    #[test]
    fn list_is_sorted_by_title_ignoring_case() {
        let state = loaded();
        let names: Vec<&str> = state.models().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["benchy", "cube"]);
        assert_eq!(
            state.wanted_images().next(),
            Some("http://localhost:51100/3d/benchy/cover.png")
        );
    }

    #[test]
    fn open_reports_slug_of_row() {
        let state = loaded();
        assert_eq!(state.update(&Message::Open(1)), Event::Open(ModelSlug::new("cube")));
        assert_eq!(state.update(&Message::Open(9)), Event::None);
    }

    #[test]
    fn refresh_is_ignored_while_running() {
        let mut state = loaded();
        assert_eq!(state.update(&Message::Refresh), Event::Refresh);
        state.set_refreshing(true);
        assert_eq!(state.update(&Message::Refresh), Event::None);
    }

    #[test]
    fn failure_empties_the_list() {
        let mut state = loaded();
        let backend = BackendUrl::parse("http://localhost:51100").expect("valid base");
        state.finish_loading(Err(Error::Network("refused".into())), &backend);
        assert!(state.models().is_empty());
        assert_eq!(state.wanted_images().count(), 0);
    }
}
