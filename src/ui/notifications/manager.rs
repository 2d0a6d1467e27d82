// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! At most [`MAX_VISIBLE`] toasts are shown; the rest wait in a FIFO queue
//! and are promoted as visible ones expire or are dismissed.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Drops expired toasts. Driven by the application clock tick.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_front(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::warning(format!("w-{i}")));
        }
        manager.push(Notification::warning("queued"));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::error(format!("e-{i}")));
        }
        manager.push(Notification::error("waiting"));

        assert!(manager.dismiss(first_id));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|n| n.message_key() == "waiting"));
    }

    #[test]
    fn promoted_toast_is_listed_first() {
        let mut manager = Manager::new();
        let oldest = Notification::warning("a");
        let oldest_id = oldest.id();
        manager.push(oldest);
        manager.push(Notification::warning("b"));
        manager.push(Notification::warning("c"));
        manager.push(Notification::warning("d"));

        manager.dismiss(oldest_id);

        let order: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(order, vec!["d", "c", "b"]);
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::success("stray");
        assert!(!manager.dismiss(stray.id()));
    }

    #[test]
    fn tick_removes_expired_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("w"));
        manager.push(Notification::error("e"));

        manager.tick(Instant::now() + Duration::from_secs(10));

        assert_eq!(manager.visible_count(), 1);
        assert!(manager.visible().all(|n| n.message_key() == "e"));
    }

    #[test]
    fn handle_message_dismisses() {
        let mut manager = Manager::new();
        let n = Notification::error("e");
        let id = n.id();
        manager.push(n);
        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }
}
