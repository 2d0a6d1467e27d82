// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! - warnings (rejected end time or buffer, unreadable config) stay 5s
//! - success (viewer started) stays 3s
//! - errors stay until dismissed
//!
//! At most three toasts are visible; the rest are queued.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
