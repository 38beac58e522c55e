// SPDX-License-Identifier: MPL-2.0
//! Backend URL construction.
//!
//! Every route and asset is resolved against one validated base URL. Path
//! segments are pushed through [`Url::path_segments_mut`] so slugs and file
//! names with spaces or reserved characters are percent-encoded.

use crate::error::{Error, Result};
use reqwest::Url;

/// Validated `http(s)` base URL of the library backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUrl {
    base: Url,
}

impl BackendUrl {
    /// Parses and validates a base URL such as `http://localhost:51100`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the text is not an absolute `http` or
    /// `https` URL.
    pub fn parse(raw: &str) -> Result<Self> {
        let base = Url::parse(raw.trim())
            .map_err(|e| Error::Config(format!("invalid backend URL `{raw}`: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "backend URL must use http or https: `{raw}`"
            )));
        }
        Ok(Self { base })
    }

    /// The base URL as text, without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// `GET {base}/api/model/{slug}`
    #[must_use]
    pub fn model(&self, slug: &str) -> Url {
        self.with_segments(["api", "model", slug])
    }

    /// `GET {base}/api/models/list`
    #[must_use]
    pub fn models_list(&self) -> Url {
        self.with_segments(["api", "models", "list"])
    }

    /// `POST {base}/api/refresh`
    #[must_use]
    pub fn refresh(&self) -> Url {
        self.with_segments(["api", "refresh"])
    }

    /// `GET {base}/healthz`
    #[must_use]
    pub fn healthz(&self) -> Url {
        self.with_segments(["healthz"])
    }

    /// `GET {base}/api/download/{package_name}` - zipped model package.
    #[must_use]
    pub fn download(&self, package_name: &str) -> Url {
        self.with_segments(["api", "download", package_name])
    }

    /// Resolves a backend-relative asset path (image, preview, file).
    ///
    /// Absolute `http(s)` URLs are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when an absolute URL is malformed.
    pub fn asset(&self, path: &str) -> Result<Url> {
        let trimmed = path.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Url::parse(trimmed)
                .map_err(|e| Error::Decode(format!("invalid asset URL `{trimmed}`: {e}")));
        }
        Ok(self.with_segments(trimmed.split('/')))
    }

    fn with_segments<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base.clone();
        // Cannot fail: `parse` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments.into_iter().filter(|s| !s.is_empty()));
        }
        url
    }
}
