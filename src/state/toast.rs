//! Transient toast notifications

use crate::submission::Notifier;
use std::collections::vec_deque::{self, VecDeque};
use std::time::{Duration, Instant};

/// Default time a toast stays on screen
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Maximum toasts kept at once; the oldest is dropped first
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Queue of visible toasts, newest last
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Drop toasts older than the configured duration
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts.retain(|t| !t.is_expired(now, ttl));
    }

    /// Oldest first
    pub fn iter(&self) -> vec_deque::Iter<'_, Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify_success(&mut self, message: &str) {
        self.push(Toast::new(ToastKind::Success, message));
    }

    fn notify_failure(&mut self, message: &str) {
        self.push(Toast::new(ToastKind::Failure, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_pushes_matching_kind() {
        let mut queue = ToastQueue::default();
        queue.notify_success("ok");
        queue.notify_failure("bad");

        let kinds: Vec<_> = queue.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Failure]);
        assert_eq!(queue.iter().last().unwrap().message, "bad");
    }

    #[test]
    fn test_queue_drops_oldest_past_capacity() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.notify_success(&format!("toast {i}"));
        }
        assert_eq!(queue.len(), MAX_TOASTS);
        assert_eq!(queue.iter().next().unwrap().message, "toast 2");
    }

    #[test]
    fn test_expire_removes_old_toasts() {
        let mut queue = ToastQueue::new(Duration::from_millis(100));
        queue.notify_success("hello");

        let created = queue.iter().next().unwrap().created_at;
        queue.expire(created + Duration::from_millis(50));
        assert_eq!(queue.len(), 1);

        queue.expire(created + Duration::from_millis(100));
        assert!(queue.is_empty());
    }
}
