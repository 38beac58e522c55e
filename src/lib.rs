// SPDX-License-Identifier: MPL-2.0
//! `shelf_lens` is a desktop client for a 3D-model library backend, built
//! with the Iced GUI framework.
//!
//! It lists the models of a library, shows one model's image gallery with
//! keyboard and thumbnail navigation, its metadata and files, and downloads
//! model packages. Localization uses Fluent and preferences live in a
//! sectioned TOML file.

#![doc(html_root_url = "https://docs.rs/shelf_lens/0.1.0")]

pub mod api;
pub mod app;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
