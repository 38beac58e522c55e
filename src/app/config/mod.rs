// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - language, theme mode, log level
//! - `[backend]` - library server URL and request timeout
//! - `[gallery]` - thumbnail size, strip scrolling, image cache size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. `SHELF_LENS_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! Out-of-range numbers are clamped by the accessor methods rather than
//! rejected, so a hand-edited file never prevents startup.
//!
//! # Examples
//!
//! ```no_run
//! use shelf_lens::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.backend.base_url = Some("http://nas.local:51100".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[backend] base_url`.
pub const ENV_BACKEND_URL: &str = "SHELF_LENS_BACKEND";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,

    /// Tracing level or filter directive, overridden by `RUST_LOG`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Library server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Configured base URL, or [`DEFAULT_BACKEND_URL`].
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Gallery and thumbnail strip settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    #[serde(
        default = "default_thumbnail_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_width: Option<f32>,

    /// Distance moved by the strip's scroll buttons.
    #[serde(
        default = "default_scroll_step_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_step_px: Option<f32>,

    /// Smooth scroll duration; `0` jumps without animating.
    #[serde(
        default = "default_smooth_scroll_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub smooth_scroll_ms: Option<u64>,

    #[serde(
        default = "default_image_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_cache_entries: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            thumbnail_width: default_thumbnail_width(),
            scroll_step_px: default_scroll_step_px(),
            smooth_scroll_ms: default_smooth_scroll_ms(),
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

impl GalleryConfig {
    #[must_use]
    pub fn thumbnail_width(&self) -> f32 {
        clamp_finite(
            self.thumbnail_width,
            DEFAULT_THUMBNAIL_WIDTH,
            MIN_THUMBNAIL_WIDTH,
            MAX_THUMBNAIL_WIDTH,
        )
    }

    #[must_use]
    pub fn scroll_step_px(&self) -> f32 {
        clamp_finite(
            self.scroll_step_px,
            DEFAULT_SCROLL_STEP_PX,
            MIN_SCROLL_STEP_PX,
            MAX_SCROLL_STEP_PX,
        )
    }

    #[must_use]
    pub fn smooth_scroll(&self) -> Duration {
        Duration::from_millis(
            self.smooth_scroll_ms
                .unwrap_or(DEFAULT_SMOOTH_SCROLL_MS)
                .min(MAX_SMOOTH_SCROLL_MS),
        )
    }

    /// Cache capacity; the cache itself clamps to its own bounds.
    #[must_use]
    pub fn image_cache_entries(&self) -> usize {
        self.image_cache_entries
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
    }
}

fn clamp_finite(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Resolves the backend URL: CLI argument, then [`ENV_BACKEND_URL`],
    /// then the config file.
    #[must_use]
    pub fn resolve_backend_url(&self, cli: Option<&str>) -> String {
        let env = std::env::var(ENV_BACKEND_URL).ok();
        resolve_backend_url_from(cli, env.as_deref(), &self.backend)
    }
}

fn resolve_backend_url_from(cli: Option<&str>, env: Option<&str>, backend: &BackendConfig) -> String {
    [cli, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| backend.base_url())
        .to_owned()
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BACKEND_URL.to_string())
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_thumbnail_width() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_WIDTH)
}

fn default_scroll_step_px() -> Option<f32> {
    Some(DEFAULT_SCROLL_STEP_PX)
}

fn default_smooth_scroll_ms() -> Option<u64> {
    Some(DEFAULT_SMOOTH_SCROLL_MS)
}

fn default_image_cache_entries() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_ENTRIES)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "config unreadable, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
                log_level: Some("debug".to_string()),
            },
            backend: BackendConfig {
                base_url: Some("http://nas.local:8080".to_string()),
                request_timeout_secs: Some(30),
            },
            gallery: GalleryConfig {
                thumbnail_width: Some(120.0),
                scroll_step_px: Some(300.0),
                smooth_scroll_ms: Some(0),
                image_cache_entries: Some(16),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.backend, BackendConfig::default());
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.backend.base_url(), DEFAULT_BACKEND_URL);
        assert_eq!(
            config.backend.request_timeout(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(config.gallery.scroll_step_px(), DEFAULT_SCROLL_STEP_PX);
        assert_eq!(config.gallery.image_cache_entries(), DEFAULT_IMAGE_CACHE_ENTRIES);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let gallery = GalleryConfig {
            thumbnail_width: Some(5.0),
            scroll_step_px: Some(f32::NAN),
            smooth_scroll_ms: Some(60_000),
            image_cache_entries: None,
        };
        assert_eq!(gallery.thumbnail_width(), MIN_THUMBNAIL_WIDTH);
        assert_eq!(gallery.scroll_step_px(), DEFAULT_SCROLL_STEP_PX);
        assert_eq!(
            gallery.smooth_scroll(),
            Duration::from_millis(MAX_SMOOTH_SCROLL_MS)
        );

        let backend = BackendConfig {
            base_url: Some("   ".to_string()),
            request_timeout_secs: Some(0),
        };
        assert_eq!(backend.base_url(), DEFAULT_BACKEND_URL);
        assert_eq!(
            backend.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn backend_url_precedence_is_cli_env_file() {
        let backend = BackendConfig {
            base_url: Some("http://file:1".to_string()),
            request_timeout_secs: None,
        };
        assert_eq!(
            resolve_backend_url_from(Some("http://cli:1"), Some("http://env:1"), &backend),
            "http://cli:1"
        );
        assert_eq!(
            resolve_backend_url_from(None, Some("http://env:1"), &backend),
            "http://env:1"
        );
        assert_eq!(
            resolve_backend_url_from(Some(""), Some(" "), &backend),
            "http://file:1"
        );
    }

    #[test]
    fn load_with_override_reports_unreadable_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery]\nthumbnail_width = \"wide\"\n")
            .expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
