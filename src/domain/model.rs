// SPDX-License-Identifier: MPL-2.0
//! Model library records.
//!
//! These types mirror the JSON the library backend returns. They are
//! read-only for the client: nothing here is ever sent back.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a model in the library (the `{slug}` route segment).
///
/// Two records describe the same model iff their slugs are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelSlug(String);

impl ModelSlug {
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModelSlug {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Full detail record returned by `GET /api/model/{slug}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub origin_url: Option<String>,
    /// Folder name of the model package, used by the bulk download route.
    pub package_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Backend-relative image paths, in gallery order.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

impl ModelRecord {
    /// Number of gallery images.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Author name, or an empty string when the backend left it out.
    #[must_use]
    pub fn author_or_empty(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }
}

/// One downloadable file of a model package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Backend-relative path of the file itself.
    pub file_path: String,
    /// Backend-relative path of a rendered preview, if one was generated.
    #[serde(default)]
    pub preview_path: Option<String>,
    #[serde(default)]
    pub file_hash: String,
    /// Modification timestamp as sent by the backend.
    #[serde(default)]
    pub date: String,
}

impl FileDescriptor {
    /// Last path segment, used as the default save-as name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file_path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.file_path)
    }

    /// Parses the timestamp. Accepts RFC 3339 and the naive
    /// `YYYY-MM-DD HH:MM:SS[.f]` / `YYYY-MM-DDTHH:MM:SS[.f]` forms.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_local());
        }
        ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    }

    /// Timestamp formatted for display, falling back to the raw text.
    #[must_use]
    pub fn display_date(&self) -> String {
        match self.parsed_date() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => self.date.clone(),
        }
    }

    /// Shortened hash for display (first 12 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        let end = self
            .file_hash
            .char_indices()
            .nth(12)
            .map_or(self.file_hash.len(), |(i, _)| i);
        &self.file_hash[..end]
    }
}

/// Entry of `GET /api/models/list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Slug used to fetch the detail record.
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    /// Backend-relative path of a cover image.
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl ModelSummary {
    #[must_use]
    pub fn slug(&self) -> ModelSlug {
        ModelSlug::new(self.name.clone())
    }
}
