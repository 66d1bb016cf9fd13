//! Badge notifications - an ordered holding area awaiting display.
//!
//! Each notification gets a stable id at enqueue time and is dismissed by
//! that id, never by position. Two dismissals racing in the same tick (manual
//! tap vs. auto-dismiss timer) therefore cannot remove the wrong entry: the
//! second lookup simply misses and is a no-op.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

use badge_catalog::Badge;

/// Stable identifier assigned at enqueue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub u64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a notification announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// A badge just transitioned from not-owned to owned.
    New,
    /// A progress nudge toward a badge not yet earned.
    Progress,
}

/// One displayable notification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeNotification {
    pub id: NotificationId,
    pub badge: Badge,
    pub kind: NotificationKind,
    pub message: String,
    /// Suggested auto-dismiss delay. Scheduling the timer - and cancelling it
    /// on manual dismissal - is the caller's job.
    pub auto_dismiss: Option<Duration>,
}

/// Insertion-ordered queue of pending notifications (oldest first).
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    next_id: u64,
    entries: VecDeque<BadgeNotification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a "badge earned" notification. Returns its stable id.
    pub fn enqueue(&mut self, badge: Badge) -> NotificationId {
        let message = format!("You earned the {} badge!", badge.name);
        self.push(badge, NotificationKind::New, message)
    }

    /// Queue every badge of an award outcome in order.
    pub fn enqueue_all(&mut self, badges: &[Badge]) -> Vec<NotificationId> {
        badges.iter().cloned().map(|b| self.enqueue(b)).collect()
    }

    /// Queue a progress nudge with a caller-supplied message.
    pub fn enqueue_progress(
        &mut self,
        badge: Badge,
        message: impl Into<String>,
    ) -> NotificationId {
        self.push(badge, NotificationKind::Progress, message.into())
    }

    fn push(&mut self, badge: Badge, kind: NotificationKind, message: String) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.push_back(BadgeNotification {
            id,
            badge,
            kind,
            message,
            auto_dismiss: None,
        });
        id
    }

    /// Set the auto-dismiss hint on a pending notification.
    pub fn set_auto_dismiss(&mut self, id: NotificationId, after: Duration) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(entry) => {
                entry.auto_dismiss = Some(after);
                true
            }
            None => false,
        }
    }

    /// Remove a notification by id. Unknown or already-dismissed ids are a
    /// no-op returning `false` - the UI may dismiss during animation races.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.entries.iter().position(|n| n.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Clear everything.
    pub fn dismiss_all(&mut self) {
        self.entries.clear();
    }

    /// Pending notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &BadgeNotification> {
        self.entries.iter()
    }

    /// The oldest pending notification.
    pub fn front(&self) -> Option<&BadgeNotification> {
        self.entries.front()
    }

    pub fn get(&self, id: NotificationId) -> Option<&BadgeNotification> {
        self.entries.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
