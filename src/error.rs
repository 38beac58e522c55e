// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors travel inside Iced messages, so every variant stores owned,
//! clonable data instead of the underlying source error.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Transport failure: connection refused, DNS, TLS, timeout.
    #[error("Network Error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP Error: status {0}")]
    Status(u16),

    /// The response body could not be decoded into the expected shape.
    #[error("Decode Error: {0}")]
    Decode(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The operation was superseded (e.g. the user navigated away).
    #[error("Cancelled")]
    Cancelled,
}

impl Error {
    /// Returns the i18n message key describing this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Network(_) => "error-network",
            Error::Status(404) => "error-model-not-found",
            Error::Status(_) => "error-http-status",
            Error::Decode(_) => "error-decode",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Cancelled => "error-cancelled",
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Error::Status(status.as_u16())
        } else if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_json_error_produces_decode_variant() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("parse should fail");
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn status_error_displays_code() {
        assert_eq!(format!("{}", Error::Status(502)), "HTTP Error: status 502");
    }

    #[test]
    fn not_found_has_dedicated_i18n_key() {
        assert_eq!(Error::Status(404).i18n_key(), "error-model-not-found");
        assert_eq!(Error::Status(500).i18n_key(), "error-http-status");
        assert_eq!(Error::Network("x".into()).i18n_key(), "error-network");
    }
}
