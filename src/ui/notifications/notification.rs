// SPDX-License-Identifier: MPL-2.0
//! A single user-facing message and how long it stays on screen.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Viewer started (3s).
    Success,
    /// Rejected input or a recoverable startup problem (5s).
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Text glyph shown at the left of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Warning | Severity::Error => "⚠",
        }
    }

    /// `None` means the toast must be dismissed by hand.
    #[must_use]
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// Fluent key, resolved at render time so a locale switch applies.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the toast has outlived its severity's display time at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_after()
            .is_some_and(|limit| now.saturating_duration_since(self.created_at) >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn warning_expires_after_five_seconds() {
        let n = Notification::warning("notification-future-end-time");
        assert!(!n.is_expired(n.created_at + Duration::from_secs(4)));
        assert!(n.is_expired(n.created_at + Duration::from_secs(5)));
    }

    #[test]
    fn success_expires_after_three_seconds() {
        let n = Notification::success("notification-viewer-launched");
        assert!(n.is_expired(n.created_at + Duration::from_secs(3)));
    }

    #[test]
    fn errors_never_expire() {
        let n = Notification::error("notification-launch-error");
        assert!(!n.is_expired(n.created_at + Duration::from_secs(3600)));
    }

    #[test]
    fn with_arg_keeps_insertion_order() {
        let n = Notification::success("k").with_arg("a", "1").with_arg("b", "2");
        assert_eq!(
            n.message_args(),
            &[("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn severity_colors_differ() {
        assert_ne!(Severity::Success.color(), Severity::Warning.color());
        assert_ne!(Severity::Warning.color(), Severity::Error.color());
    }
}
