// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the model library records as the backend serves them.
//!
//! # Modules
//!
//! - [`model`]: Detail record ([`ModelRecord`](model::ModelRecord)), file entries
//!   ([`FileDescriptor`](model::FileDescriptor)), list entries
//!   ([`ModelSummary`](model::ModelSummary)) and model identity
//!   ([`ModelSlug`](model::ModelSlug))

pub mod model;

pub use model::{FileDescriptor, ModelRecord, ModelSlug, ModelSummary};
