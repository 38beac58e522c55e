// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] with mutable access to the
//! state it needs and returns the follow-up [`Task`]. Backend requests are
//! issued here; their results come back as [`Message`] variants.

use super::fetch::{FetchTracker, Generation};
use super::{Message, Screen};
use crate::api::BackendClient;
use crate::domain::{ModelRecord, ModelSlug, ModelSummary};
use crate::error::{Error, Result};
use crate::media::ImageCache;
use crate::ui::detail::{self, DownloadTarget};
use crate::ui::library;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use reqwest::Url;
use std::path::PathBuf;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub client: &'a BackendClient,
    pub model_fetch: &'a mut FetchTracker,
    pub library: &'a mut library::State,
    pub detail: &'a mut detail::State,
    pub images: &'a mut ImageCache,
    pub notifications: &'a mut notifications::Manager,
}

/// Switches to the detail screen and fetches `slug`, superseding any load
/// still in flight.
pub fn open_model(ctx: &mut UpdateContext<'_>, slug: ModelSlug) -> Task<Message> {
    let generation = ctx.model_fetch.begin();
    tracing::info!(%slug, %generation, "loading model");

    ctx.detail.open(slug.clone());
    *ctx.screen = Screen::Detail;
    ctx.notifications.clear_key("notification-model-load-error");

    let client = ctx.client.clone();
    let (task, handle) = Task::perform(
        async move { client.fetch_model(&slug).await },
        move |result| Message::ModelLoaded { generation, result },
    )
    .abortable();
    ctx.model_fetch.attach(handle);
    task
}

/// Fetches the model list for the library screen.
pub fn load_library(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.library.begin_loading();
    let client = ctx.client.clone();
    Task::perform(
        async move { client.list_models().await },
        Message::ModelListLoaded,
    )
}

/// Startup connectivity probe.
pub fn check_health(client: &BackendClient) -> Task<Message> {
    let client = client.clone();
    Task::perform(async move { client.health().await }, Message::HealthChecked)
}

pub fn handle_library_message(ctx: &mut UpdateContext<'_>, message: &library::Message) -> Task<Message> {
    match ctx.library.update(message) {
        library::Event::None => Task::none(),
        library::Event::Open(slug) => open_model(ctx, slug),
        library::Event::Reload => load_library(ctx),
        library::Event::Refresh => {
            ctx.library.set_refreshing(true);
            let client = ctx.client.clone();
            Task::perform(
                async move { client.refresh_library().await },
                Message::LibraryRefreshed,
            )
        }
    }
}

pub fn handle_detail_message(ctx: &mut UpdateContext<'_>, message: detail::Message) -> Task<Message> {
    let (event, task) = ctx.detail.update(message);
    let follow_up = handle_detail_event(ctx, event);
    Task::batch([task.map(Message::Detail), follow_up])
}

fn handle_detail_event(ctx: &mut UpdateContext<'_>, event: detail::Event) -> Task<Message> {
    match event {
        detail::Event::None => Task::none(),
        detail::Event::Back => {
            ctx.model_fetch.cancel();
            ctx.detail.close();
            *ctx.screen = Screen::Library;
            if ctx.library.models().is_empty() && !ctx.library.is_loading() {
                load_library(ctx)
            } else {
                // thumbnails may have been evicted while the detail was shown
                fetch_images(ctx.client, ctx.images, ctx.library.wanted_images(), None)
            }
        }
        detail::Event::Retry(slug) => open_model(ctx, slug),
        detail::Event::Download(target) => choose_download_destination(target),
        detail::Event::SelectionChanged(change) => {
            tracing::debug!(
                previous = change.previous,
                current = change.current,
                cause = ?change.cause,
                "gallery selection changed"
            );
            Task::none()
        }
    }
}

pub fn handle_model_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: Generation,
    result: Result<ModelRecord>,
) -> Task<Message> {
    if !ctx.model_fetch.accept(generation) {
        return Task::none();
    }

    let failure = result.as_ref().err().cloned();
    let (event, task) = ctx.detail.finish_load(result, ctx.client.urls());

    if let Some(error) = failure {
        let slug = ctx.detail.slug().map(ToString::to_string).unwrap_or_default();
        ctx.notifications.push(
            Notification::failure("notification-model-load-error", &error).with_arg("slug", slug),
        );
    }

    let images = fetch_images(ctx.client, ctx.images, ctx.detail.wanted_images(), Some(generation));
    let follow_up = handle_detail_event(ctx, event);
    Task::batch([task.map(Message::Detail), images, follow_up])
}

pub fn handle_model_list_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<ModelSummary>>,
) -> Task<Message> {
    if let Err(error) = &result {
        ctx.notifications
            .push(Notification::failure("notification-library-load-error", error));
    }
    ctx.library.finish_loading(result, ctx.client.urls());
    fetch_images(ctx.client, ctx.images, ctx.library.wanted_images(), None)
}

pub fn handle_library_refreshed(ctx: &mut UpdateContext<'_>, result: Result<()>) -> Task<Message> {
    ctx.library.set_refreshing(false);
    match result {
        Ok(()) => {
            ctx.notifications
                .push(Notification::success("notification-refresh-success"));
            // covers may have changed on disk
            ctx.images.forget_failed();
            load_library(ctx)
        }
        Err(error) => {
            tracing::warn!(%error, "library refresh failed");
            ctx.notifications
                .push(Notification::failure("notification-refresh-error", &error));
            Task::none()
        }
    }
}

pub fn handle_image_fetched(
    ctx: &mut UpdateContext<'_>,
    url: String,
    generation: Option<Generation>,
    result: Result<Vec<u8>>,
) -> Task<Message> {
    if let Some(generation) = generation {
        if !ctx.model_fetch.is_current(generation) {
            tracing::debug!(%url, stale = %generation, "discarding image of a superseded model");
            ctx.images.abandon(&url);
            // the visible screen may share this URL
            return match *ctx.screen {
                Screen::Detail => fetch_images(
                    ctx.client,
                    ctx.images,
                    ctx.detail.wanted_images(),
                    Some(ctx.model_fetch.current()),
                ),
                Screen::Library => {
                    fetch_images(ctx.client, ctx.images, ctx.library.wanted_images(), None)
                }
            };
        }
    }

    match result {
        Ok(bytes) => ctx.images.insert_bytes(url, bytes),
        Err(error) => {
            tracing::debug!(%url, %error, "image fetch failed");
            ctx.images.mark_failed(url);
        }
    }
    Task::none()
}

pub fn handle_health_checked(ctx: &mut UpdateContext<'_>, result: Result<()>) -> Task<Message> {
    let url = ctx.client.urls().as_str().to_string();
    match result {
        Ok(()) => tracing::info!(%url, "backend is healthy"),
        Err(error) => {
            tracing::warn!(%url, %error, "backend health check failed");
            ctx.notifications.push(
                Notification::warning("notification-backend-unreachable").with_arg("url", url),
            );
        }
    }
    Task::none()
}

pub fn handle_download_destination(
    ctx: &mut UpdateContext<'_>,
    target: DownloadTarget,
    path: Option<PathBuf>,
) -> Task<Message> {
    let file = target.suggested_name();
    let Some(path) = path else {
        tracing::debug!(%file, "download cancelled in save dialog");
        return Task::none();
    };

    let url = match target.url(ctx.client.urls()) {
        Ok(url) => url,
        Err(error) => {
            tracing::warn!(%file, %error, "download URL could not be built");
            ctx.notifications.push(
                Notification::failure("notification-download-error", &error).with_arg("file", file),
            );
            return Task::none();
        }
    };

    ctx.notifications
        .push(Notification::info("notification-download-started").with_arg("file", file.clone()));

    let client = ctx.client.clone();
    Task::perform(
        async move { download(client, url, path).await },
        move |result| Message::DownloadFinished { file, result },
    )
}

pub fn handle_download_finished(
    ctx: &mut UpdateContext<'_>,
    file: String,
    result: Result<u64>,
) -> Task<Message> {
    match result {
        Ok(bytes) => {
            tracing::info!(%file, bytes, "download saved");
            ctx.notifications
                .push(Notification::success("notification-download-success").with_arg("file", file));
        }
        Err(error) => {
            tracing::warn!(%file, %error, "download failed");
            ctx.notifications.push(
                Notification::failure("notification-download-error", &error).with_arg("file", file),
            );
        }
    }
    Task::none()
}

fn choose_download_destination(target: DownloadTarget) -> Task<Message> {
    let file_name = target.suggested_name();
    Task::perform(
        async move {
            let path = rfd::AsyncFileDialog::new()
                .set_file_name(&file_name)
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf());
            (target, path)
        },
        |(target, path)| Message::DownloadDestinationChosen { target, path },
    )
}

async fn download(client: BackendClient, url: Url, path: PathBuf) -> Result<u64> {
    client
        .download_to(url, &path, |received, total| {
            tracing::trace!(received, ?total, "download progress");
        })
        .await
}

/// Issues one fetch per URL the cache does not hold. The cache is grown
/// first so the whole set stays resident.
fn fetch_images<'u>(
    client: &BackendClient,
    images: &mut ImageCache,
    urls: impl Iterator<Item = &'u str>,
    generation: Option<Generation>,
) -> Task<Message> {
    let urls: Vec<&str> = urls.collect();
    images.ensure_capacity(urls.len());

    let tasks: Vec<Task<Message>> = urls
        .into_iter()
        .filter(|url| images.begin_fetch(url))
        .map(|url| {
            let client = client.clone();
            let url = url.to_string();
            Task::perform(
                async move {
                    let result = match Url::parse(&url) {
                        Ok(parsed) => client.fetch_bytes(parsed).await,
                        Err(e) => Err(Error::Decode(format!("invalid image URL `{url}`: {e}"))),
                    };
                    (url, result)
                },
                move |(url, result)| Message::ImageFetched {
                    url,
                    generation,
                    result,
                },
            )
        })
        .collect();

    if !tasks.is_empty() {
        tracing::debug!(count = tasks.len(), "fetching images");
    }
    Task::batch(tasks)
}
