// SPDX-License-Identifier: MPL-2.0
//! Model detail screen.
//!
//! Shows one library model: the image gallery, its metadata (author,
//! license, origin, package), the description and the downloadable files.
//! The screen owns the gallery state across models so that switching from
//! one slug to another is seen by the controller as a model change.

use crate::api::BackendUrl;
use crate::domain::{FileDescriptor, ModelRecord, ModelSlug};
use crate::error::{Error, Result};
use crate::gallery::SelectionChanged;
use crate::i18n::fluent::I18n;
use crate::media::{CachedImage, ImageCache};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery_view;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, rule, scrollable, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length, Subscription, Task};
use reqwest::Url;

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cache: &'a ImageCache,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Gallery(gallery_view::Message),
    Back,
    Retry,
    DownloadAll,
    DownloadFile(usize),
}

/// What the user asked to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget {
    /// The zipped package of the whole model.
    Package { package_name: String },
    /// One file of the package.
    File { file_path: String, file_name: String },
}

impl DownloadTarget {
    /// Default name offered by the save dialog.
    #[must_use]
    pub fn suggested_name(&self) -> String {
        match self {
            DownloadTarget::Package { package_name } => format!("{package_name}.zip"),
            DownloadTarget::File { file_name, .. } => file_name.clone(),
        }
    }

    /// Backend URL the bytes are streamed from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when a file path is a malformed absolute URL.
    pub fn url(&self, backend: &BackendUrl) -> Result<Url> {
        match self {
            DownloadTarget::Package { package_name } => Ok(backend.download(package_name)),
            DownloadTarget::File { file_path, .. } => backend.asset(file_path),
        }
    }
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Back,
    Retry(ModelSlug),
    Download(DownloadTarget),
    SelectionChanged(SelectionChanged),
}

/// Fetch state of the displayed model.
#[derive(Debug, Clone, Default)]
pub enum Load {
    #[default]
    Idle,
    Loading,
    Loaded(Box<ModelRecord>),
    Failed(Error),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    slug: Option<ModelSlug>,
    load: Load,
    image_urls: Vec<String>,
    /// Resolved preview URL per file, aligned with `record.files`.
    preview_urls: Vec<Option<String>>,
    gallery: gallery_view::State,
}

impl State {
    #[must_use]
    pub fn new(gallery: gallery_view::Settings) -> Self {
        Self {
            gallery: gallery_view::State::new(gallery),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn slug(&self) -> Option<&ModelSlug> {
        self.slug.as_ref()
    }

    #[must_use]
    pub fn load(&self) -> &Load {
        &self.load
    }

    #[must_use]
    pub fn record(&self) -> Option<&ModelRecord> {
        match &self.load {
            Load::Loaded(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery_view::State {
        &self.gallery
    }

    #[must_use]
    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    /// Whether arrow keys drive the gallery: a model is loaded and has images.
    #[must_use]
    pub fn accepts_keyboard(&self) -> bool {
        matches!(self.load, Load::Loaded(_)) && self.gallery.is_mounted()
    }

    /// Starts showing `slug`. The previous record is dropped right away so a
    /// stale model is never rendered under the new title.
    pub fn open(&mut self, slug: ModelSlug) {
        self.slug = Some(slug);
        self.load = Load::Loading;
        self.image_urls.clear();
        self.preview_urls.clear();
    }

    /// Leaves the screen and unmounts the gallery, so the next visit starts
    /// on the first image.
    pub fn close(&mut self) {
        self.load = Load::Idle;
        self.gallery.unmount();
    }

    /// Applies a finished fetch of the current slug.
    pub fn finish_load(
        &mut self,
        result: Result<ModelRecord>,
        backend: &BackendUrl,
    ) -> (Event, Task<Message>) {
        let Some(slug) = self.slug.clone() else {
            return (Event::None, Task::none());
        };

        match result {
            Ok(record) => {
                self.image_urls = record
                    .images
                    .iter()
                    .map(|path| resolve(backend, path))
                    .collect();
                self.preview_urls = record
                    .files
                    .iter()
                    .map(|file| file.preview_path.as_deref().map(|p| resolve(backend, p)))
                    .collect();
                tracing::info!(
                    %slug,
                    images = record.image_count(),
                    files = record.files.len(),
                    "model loaded"
                );
                let count = record.image_count();
                self.load = Load::Loaded(Box::new(record));

                let (effect, task) = self.gallery.show_model(&slug, count);
                (gallery_event(effect), task.map(Message::Gallery))
            }
            Err(error) => {
                tracing::warn!(%slug, %error, "model fetch failed");
                self.image_urls.clear();
                self.preview_urls.clear();
                self.load = Load::Failed(error);
                (Event::None, Task::none())
            }
        }
    }

    /// Every image URL this screen wants decoded: gallery images first, then
    /// file previews.
    pub fn wanted_images(&self) -> impl Iterator<Item = &str> {
        self.image_urls
            .iter()
            .map(String::as_str)
            .chain(self.preview_urls.iter().flatten().map(String::as_str))
    }

    pub fn set_window_width(&mut self, width: f32) {
        self.gallery.set_window_width(width);
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Gallery(message) => {
                if !self.accepts_keyboard() {
                    return (Event::None, Task::none());
                }
                let (effect, task) = self.gallery.update(message);
                (gallery_event(effect), task.map(Message::Gallery))
            }
            Message::Back => (Event::Back, Task::none()),
            Message::Retry => match &self.slug {
                Some(slug) => (Event::Retry(slug.clone()), Task::none()),
                None => (Event::None, Task::none()),
            },
            Message::DownloadAll => match self.record() {
                Some(record) => (
                    Event::Download(DownloadTarget::Package {
                        package_name: record.package_name.clone(),
                    }),
                    Task::none(),
                ),
                None => (Event::None, Task::none()),
            },
            Message::DownloadFile(index) => match self.record().and_then(|r| r.files.get(index)) {
                Some(file) => (
                    Event::Download(DownloadTarget::File {
                        file_path: file.file_path.clone(),
                        file_name: file.file_name().to_string(),
                    }),
                    Task::none(),
                ),
                None => (Event::None, Task::none()),
            },
        }
    }

    /// Gallery keyboard and animation subscriptions, only while a model with
    /// images is on screen.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.accepts_keyboard() {
            self.gallery.subscription().map(Message::Gallery)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let back = button(Text::new(format!("← {}", ctx.i18n.tr("detail-back"))).size(typography::BODY))
            .on_press(Message::Back)
            .style(styles::button::subtle);

        let body: Element<'a, Message> = match &self.load {
            Load::Idle | Load::Loading => centered(Text::new(ctx.i18n.tr("detail-loading")).into()),
            Load::Failed(error) => self.view_failure(&ctx, error),
            Load::Loaded(record) => self.view_record(&ctx, record),
        };

        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(back)
            .push(body)
            .into()
    }

    fn view_failure<'a>(&'a self, ctx: &ViewContext<'a>, error: &Error) -> Element<'a, Message> {
        let reason = match error {
            Error::Status(status) if *status != 404 => ctx
                .i18n
                .tr_with_args(error.i18n_key(), &[("status", &status.to_string())]),
            _ => ctx.i18n.tr(error.i18n_key()),
        };

        let content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new(ctx.i18n.tr("detail-load-failed")).size(typography::TITLE_SM))
            .push(Text::new(reason).size(typography::BODY_SM))
            .push(
                button(Text::new(ctx.i18n.tr("detail-retry")).size(typography::BODY))
                    .on_press(Message::Retry)
                    .style(styles::button::primary),
            );

        centered(content.into())
    }

    fn view_record<'a>(&'a self, ctx: &ViewContext<'a>, record: &'a ModelRecord) -> Element<'a, Message> {
        let gallery = self
            .gallery
            .view(gallery_view::ViewContext {
                i18n: ctx.i18n,
                cache: ctx.cache,
                image_urls: &self.image_urls,
            })
            .map(Message::Gallery);

        let mut main = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .push(Text::new(record.title.as_str()).size(typography::TITLE_LG))
            .push(gallery);

        if let Some(description) = record.description.as_deref().filter(|d| !d.trim().is_empty()) {
            main = main
                .push(Text::new(ctx.i18n.tr("detail-description")).size(typography::TITLE_SM))
                .push(Text::new(description).size(typography::BODY));
        }

        main = main.push(self.view_files(ctx, &record.files));

        Row::new()
            .spacing(spacing::MD)
            .push(scrollable(main).width(Length::Fill).height(Length::Fill))
            .push(view_metadata(ctx, record))
            .height(Length::Fill)
            .into()
    }

    fn view_files<'a>(&'a self, ctx: &ViewContext<'a>, files: &'a [FileDescriptor]) -> Element<'a, Message> {
        let mut list = Column::new()
            .spacing(spacing::XS)
            .push(rule::horizontal(1))
            .push(Text::new(ctx.i18n.tr("detail-files")).size(typography::TITLE_SM));

        if files.is_empty() {
            return list
                .push(Text::new(ctx.i18n.tr("detail-no-files")).size(typography::BODY_SM))
                .into();
        }

        for (index, file) in files.iter().enumerate() {
            let preview_url = self.preview_urls.get(index).and_then(Option::as_deref);
            list = list.push(self.view_file(ctx, index, file, preview_url));
        }
        list.into()
    }

    fn view_file<'a>(
        &'a self,
        ctx: &ViewContext<'a>,
        index: usize,
        file: &'a FileDescriptor,
        preview_url: Option<&str>,
    ) -> Element<'a, Message> {
        let preview: Element<'a, Message> =
            match preview_url.and_then(|url| ctx.cache.peek(url)) {
                Some(CachedImage::Ready(handle)) => image(handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(sizing::LIBRARY_THUMBNAIL))
                    .height(Length::Fixed(sizing::LIBRARY_THUMBNAIL))
                    .into(),
                _ => Space::new()
                    .width(Length::Fixed(sizing::LIBRARY_THUMBNAIL))
                    .height(Length::Fixed(sizing::LIBRARY_THUMBNAIL))
                    .into(),
            };

        let mut details = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(Text::new(file.file_name()).size(typography::BODY));
        if !file.date.trim().is_empty() {
            details = details.push(
                Text::new(ctx.i18n.tr_with_args("file-date", &[("date", &file.display_date())]))
                    .size(typography::CAPTION),
            );
        }
        if !file.file_hash.is_empty() {
            details = details.push(
                Text::new(ctx.i18n.tr_with_args("file-hash", &[("hash", file.short_hash())]))
                    .size(typography::MONOSPACE_SIZE)
                    .font(iced::Font::MONOSPACE),
            );
        }

        let save = button(Text::new(ctx.i18n.tr("detail-download-file")).size(typography::BODY_SM))
            .on_press(Message::DownloadFile(index))
            .style(styles::button::subtle);

        Container::new(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(preview)
                .push(details)
                .push(save),
        )
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
    }
}

fn view_metadata<'a>(ctx: &ViewContext<'a>, record: &'a ModelRecord) -> Element<'a, Message> {
    let unknown = ctx.i18n.tr("detail-unknown");
    let or_unknown = |value: Option<&str>| {
        value
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| unknown.clone(), str::to_string)
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .push(field(ctx.i18n.tr("detail-author"), or_unknown(record.author.as_deref())))
        .push(field(ctx.i18n.tr("detail-license"), or_unknown(record.license.as_deref())))
        .push(field(ctx.i18n.tr("detail-origin"), or_unknown(record.origin_url.as_deref())))
        .push(field(ctx.i18n.tr("detail-package"), record.package_name.clone()))
        .push(Space::new().height(Length::Fixed(spacing::SM)))
        .push(
            button(
                Container::new(Text::new(ctx.i18n.tr("detail-download-all")).size(typography::BODY))
                    .center_x(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press(Message::DownloadAll)
            .style(styles::button::primary),
        );

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::METADATA_PANEL_WIDTH))
        .style(styles::container::panel)
        .into()
}

fn field<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(Text::new(value).size(typography::BODY))
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn gallery_event(effect: gallery_view::Effect) -> Event {
    match effect {
        gallery_view::Effect::None => Event::None,
        gallery_view::Effect::SelectionChanged(change) => Event::SelectionChanged(change),
    }
}

/// Resolves a backend-relative asset path. A malformed absolute URL is kept
/// as is; its fetch then fails and the view shows a placeholder.
fn resolve(backend: &BackendUrl, path: &str) -> String {
    match backend.asset(path) {
        Ok(url) => url.to_string(),
        Err(error) => {
            tracing::debug!(path, %error, "asset path could not be resolved");
            path.to_string()
        }
    }
}
