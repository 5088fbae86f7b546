// Toast queue for the status bar
// Notices raised by the controller are queued here with priorities and auto-dismiss

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use forum_core::controller::{Notice, NoticeLevel};

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NoticeLevel,
    pub duration: Duration,
    pub shown_at: Option<Instant>,
}

impl Notification {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            duration: default_duration(level),
            shown_at: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at
            .map(|shown| shown.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    pub fn mark_shown(&mut self) {
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
    }

    fn same_as(&self, other: &Notification) -> bool {
        self.level == other.level && self.message == other.message
    }
}

impl From<Notice> for Notification {
    fn from(notice: Notice) -> Self {
        Self::new(notice.level, notice.text)
    }
}

fn default_duration(level: NoticeLevel) -> Duration {
    match level {
        NoticeLevel::Info | NoticeLevel::Success => Duration::from_secs(3),
        NoticeLevel::Warning => Duration::from_secs(4),
        NoticeLevel::Error => Duration::from_secs(5),
    }
}

/// Queue of notifications with priority handling
#[derive(Debug, Default)]
pub struct NotificationQueue {
    /// Pending notifications, highest priority at the front
    queue: VecDeque<Notification>,
    current: Option<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show now, replace a lower-priority current one, or queue behind it.
    ///
    /// Repeating the notification on screen restarts its timer; repeating a
    /// queued one is a no-op.
    pub fn push(&mut self, notification: Notification) {
        if let Some(current) = self.current.as_mut() {
            if current.same_as(&notification) {
                current.shown_at = Some(Instant::now());
                return;
            }
        }
        if self.queue.iter().any(|queued| queued.same_as(&notification)) {
            return;
        }

        let replaces_current = self
            .current
            .as_ref()
            .map_or(true, |current| notification.level > current.level);
        if replaces_current {
            // A replaced notification was already on screen; it is dropped, not re-queued.
            let mut n = notification;
            n.mark_shown();
            self.current = Some(n);
            return;
        }

        let pos = self
            .queue
            .iter()
            .position(|n| n.level < notification.level)
            .unwrap_or(self.queue.len());
        self.queue.insert(pos, notification);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Advance to the next notification once the current one expired.
    pub fn tick(&mut self) {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            self.advance();
        }
    }

    fn advance(&mut self) {
        if self.current.is_none() {
            if let Some(mut next) = self.queue.pop_front() {
                next.mark_shown();
                self.current = Some(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleeting(level: NoticeLevel, message: &str) -> Notification {
        let mut n = Notification::new(level, message);
        n.duration = Duration::ZERO;
        n
    }

    #[test]
    fn test_notice_conversion_picks_duration() {
        let n = Notification::from(Notice::error("Connection failed"));
        assert_eq!(n.level, NoticeLevel::Error);
        assert_eq!(n.duration, Duration::from_secs(5));
        assert_eq!(n.message, "Connection failed");

        let n = Notification::from(Notice::success("Secure channel opened: Apophis"));
        assert_eq!(n.duration, Duration::from_secs(3));
    }

    #[test]
    fn test_first_notification_shows_immediately() {
        let mut q = NotificationQueue::new();
        assert!(q.current().is_none());

        q.push(Notification::new(NoticeLevel::Info, "first"));
        assert_eq!(q.current().unwrap().message, "first");
        assert!(q.current().unwrap().shown_at.is_some());
    }

    #[test]
    fn test_higher_priority_replaces_current() {
        let mut q = NotificationQueue::new();
        q.push(Notification::new(NoticeLevel::Info, "low"));
        q.push(fleeting(NoticeLevel::Error, "high"));
        assert_eq!(q.current().unwrap().message, "high");

        // The replaced one is gone, not queued.
        q.tick();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_lower_priority_waits_in_queue() {
        let mut q = NotificationQueue::new();
        q.push(fleeting(NoticeLevel::Warning, "thread already exists"));
        q.push(Notification::new(NoticeLevel::Info, "later"));
        assert_eq!(q.current().unwrap().message, "thread already exists");

        q.tick();
        assert_eq!(q.current().unwrap().message, "later");
    }

    #[test]
    fn test_repeat_after_expiry_is_shown_again() {
        let mut q = NotificationQueue::new();
        q.push(fleeting(NoticeLevel::Warning, "thread already exists"));
        q.tick();
        assert!(q.current().is_none());

        q.push(Notification::new(NoticeLevel::Warning, "thread already exists"));
        assert_eq!(q.current().unwrap().message, "thread already exists");
    }

    #[test]
    fn test_repeat_while_shown_restarts_timer() {
        let mut q = NotificationQueue::new();
        q.push(Notification::new(NoticeLevel::Error, "Delete failed"));
        let first_shown = q.current().unwrap().shown_at.unwrap();

        std::thread::sleep(Duration::from_millis(5));
        q.push(Notification::new(NoticeLevel::Error, "Delete failed"));
        assert!(q.current().unwrap().shown_at.unwrap() > first_shown);

        // Nothing was queued behind it.
        q.current = None;
        q.tick();
        assert!(q.current().is_none());
    }

    #[test]
    fn test_same_text_at_another_level_is_not_a_repeat() {
        let mut q = NotificationQueue::new();
        q.push(fleeting(NoticeLevel::Error, "Connection failed"));
        q.push(Notification::new(NoticeLevel::Info, "Connection failed"));
        q.push(Notification::new(NoticeLevel::Info, "Connection failed"));

        q.tick();
        assert_eq!(q.current().unwrap().level, NoticeLevel::Info);
        q.current = None;
        q.advance();
        assert!(q.current().is_none());
    }
}
