// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen owns a `State`, handles its own `Message`s and reports what the
//! application should do through an `Event`.
//!
//! # Screens
//!
//! - [`library`] - List of library models with refresh
//! - [`detail`] - One model: gallery, metadata, files and downloads
//!
//! # Shared Infrastructure
//!
//! - [`gallery_view`] - Main image, overlay navigation and thumbnail strip
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod detail;
pub mod gallery_view;
pub mod library;
pub mod notifications;
pub mod styles;
pub mod theming;
