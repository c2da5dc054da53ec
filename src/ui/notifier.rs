//! # Transient Notifier
//!
//! Holds at most one short-lived error message. Raising a notice hands back a
//! [`NoticeId`] that the caller schedules for expiry; only the expiry carrying
//! the id of the outstanding notice clears it, so a timer left over from a
//! replaced notice is harmless.

use std::time::Duration;

/// Default lifetime of a notice before it auto-clears.
pub const DEFAULT_NOTICE_DELAY: Duration = Duration::from_millis(1000);

/// Identifies one raised notice and the countdown that belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
}

#[derive(Debug)]
pub struct Notifier {
    current: Option<Notice>,
    next_id: u64,
    delay: Duration,
}

impl Notifier {
    pub fn new(delay: Duration) -> Self {
        Self {
            current: None,
            next_id: 0,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Replace any outstanding notice and return the id of its new countdown.
    pub fn raise(&mut self, message: impl Into<String>) -> NoticeId {
        self.next_id += 1;
        let id = NoticeId(self.next_id);
        self.current = Some(Notice {
            id,
            message: message.into(),
        });
        id
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Clear the notice if `id` is still the outstanding one.
    ///
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_and_expire() {
        let mut notifier = Notifier::default();
        let id = notifier.raise("boom");
        assert_eq!(notifier.message(), Some("boom"));

        assert!(notifier.expire(id));
        assert_eq!(notifier.message(), None);
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut notifier = Notifier::default();
        let first = notifier.raise("first");
        let second = notifier.raise("second");
        assert_ne!(first, second);

        assert!(!notifier.expire(first));
        assert_eq!(notifier.message(), Some("second"));

        assert!(notifier.expire(second));
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_clear_then_expire_is_noop() {
        let mut notifier = Notifier::default();
        let id = notifier.raise("gone");
        notifier.clear();
        assert!(!notifier.expire(id));
    }

    #[test]
    fn test_delay_is_configurable() {
        let notifier = Notifier::new(Duration::from_secs(2));
        assert_eq!(notifier.delay(), Duration::from_secs(2));
        assert_eq!(Notifier::default().delay(), DEFAULT_NOTICE_DELAY);
    }
}
