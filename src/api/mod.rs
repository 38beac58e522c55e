// SPDX-License-Identifier: MPL-2.0
//! Access to the model library backend over HTTP.
//!
//! - [`urls`] - route and asset URL construction
//! - [`client`] - JSON fetches, library refresh and streamed downloads

pub mod client;
pub mod urls;

pub use client::BackendClient;
pub use urls::BackendUrl;
