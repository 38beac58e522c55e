// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::config::Config;
use super::fetch::Generation;
use crate::api::BackendClient;
use crate::domain::{ModelRecord, ModelSlug, ModelSummary};
use crate::error::Error;
use crate::ui::detail::{self, DownloadTarget};
use crate::ui::library;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Library(library::Message),
    Detail(detail::Message),
    Notification(notifications::NotificationMessage),
    /// Result of `GET /api/model/{slug}`, stamped with the load it belongs to.
    ModelLoaded {
        generation: Generation,
        result: Result<ModelRecord, Error>,
    },
    ModelListLoaded(Result<Vec<ModelSummary>, Error>),
    LibraryRefreshed(Result<(), Error>),
    /// Bytes of one gallery image, library cover or file preview.
    ///
    /// Images requested for a model carry that model's generation; library
    /// covers carry none.
    ImageFetched {
        url: String,
        generation: Option<Generation>,
        result: Result<Vec<u8>, Error>,
    },
    HealthChecked(Result<(), Error>),
    /// The save dialog closed; `path` is `None` when it was cancelled.
    DownloadDestinationChosen {
        target: DownloadTarget,
        path: Option<PathBuf>,
    },
    DownloadFinished {
        file: String,
        result: Result<u64, Error>,
    },
    WindowResized(f32),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Everything the launcher resolved before the window opens.
#[derive(Debug)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Model to open directly instead of the library list.
    pub slug: Option<ModelSlug>,
    pub config: Config,
    /// i18n key of a warning raised while loading the config.
    pub config_warning: Option<String>,
    pub client: BackendClient,
}
