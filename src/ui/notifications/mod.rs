// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for failures and finished downloads.
//!
//! - [`notification`] - `Notification` with severity, i18n key and arguments
//! - [`manager`] - queueing, auto-dismiss and dismissal
//! - [`toast`] - rendering in the bottom-right corner
//!
//! ```ignore
//! manager.push(Notification::failure("notification-model-load-error", &error).with_arg("slug", slug));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success and info toasts disappear after 3s, warnings after 5s; errors
//! stay until dismissed. At most three are visible, the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
