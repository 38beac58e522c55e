// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the model library backend.
//!
//! The client is cheap to clone (it wraps a shared `reqwest::Client`), so
//! every Iced task gets its own copy moved into the future.

use super::urls::BackendUrl;
use crate::domain::{ModelRecord, ModelSlug, ModelSummary};
use crate::error::{Error, Result};
use futures_util::StreamExt;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

const USER_AGENT: &str = concat!("ShelfLens/", env!("CARGO_PKG_VERSION"));

/// Handle to the library backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    urls: BackendUrl,
}

impl BackendClient {
    /// Builds a client for `urls` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the TLS backend cannot be initialized.
    pub fn new(urls: BackendUrl, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;
        Ok(Self { http, urls })
    }

    #[must_use]
    pub fn urls(&self) -> &BackendUrl {
        &self.urls
    }

    /// Fetches the detail record of one model.
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses and bodies that are not a valid
    /// model record are all errors; nothing partial is ever returned.
    pub async fn fetch_model(&self, slug: &ModelSlug) -> Result<ModelRecord> {
        self.get_json(self.urls.model(slug.as_str())).await
    }

    /// Fetches the summaries of every model in the library.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`fetch_model`](Self::fetch_model).
    pub async fn list_models(&self) -> Result<Vec<ModelSummary>> {
        self.get_json(self.urls.models_list()).await
    }

    /// Asks the backend to rescan its library folders.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn refresh_library(&self) -> Result<()> {
        let url = self.urls.refresh();
        tracing::info!(%url, "requesting library refresh");
        let response = self.http.post(url).send().await?;
        check_status(&response)?;
        Ok(())
    }

    /// Probes `GET /healthz`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<()> {
        let response = self.http.get(self.urls.healthz()).send().await?;
        check_status(&response)
    }

    /// Downloads a whole asset into memory (gallery images, previews).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn fetch_bytes(&self, url: Url) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        check_status(&response)?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Streams `url` into `destination`, reporting `(received, total)` after
    /// every chunk. Returns the number of bytes written.
    ///
    /// A partially written file is removed on failure.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status or I/O failure.
    pub async fn download_to(
        &self,
        url: Url,
        destination: &Path,
        mut progress: impl FnMut(u64, Option<u64>) + Send,
    ) -> Result<u64> {
        tracing::info!(%url, destination = %destination.display(), "download started");
        let response = self.http.get(url.clone()).send().await?;
        check_status(&response)?;

        let total = response.content_length();
        let mut file = tokio::fs::File::create(destination).await?;
        let mut received: u64 = 0;
        let mut stream = response.bytes_stream();

        let outcome: Result<()> = async {
            while let Some(chunk) = stream.next().await {
                let chunk = chunk?;
                file.write_all(&chunk).await?;
                received += chunk.len() as u64;
                progress(received, total);
            }
            file.flush().await?;
            Ok(())
        }
        .await;

        if let Err(error) = outcome {
            drop(file);
            let _ = tokio::fs::remove_file(destination).await;
            tracing::warn!(%url, %error, "download failed, partial file removed");
            return Err(error);
        }

        tracing::info!(%url, bytes = received, "download finished");
        Ok(received)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url.clone()).send().await?;
        check_status(&response)?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::debug!(%url, error = %e, "response body is not the expected JSON");
            Error::from(e)
        })
    }
}

fn check_status(response: &reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Status(status.as_u16()))
    }
}
