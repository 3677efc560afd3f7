//! Toast 通知
//!
//! 右上角的短暂提示，到期后在下一次 tick 时移除。

use std::time::{Duration, Instant};

/// 同时显示的最大数量，超出时丢弃最旧的
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant, ttl: Duration) {
        if self.items.len() == MAX_TOASTS {
            self.items.remove(0);
        }
        self.items.push(Toast {
            kind,
            message: message.into(),
            expires_at: now + ttl,
        });
    }

    /// Drop toasts whose time is up.
    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|t| t.expires_at > now);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.items.iter()
    }
}

#[cfg(test)]
impl ToastQueue {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(3000);

    #[test]
    fn toasts_expire_after_ttl() {
        let mut q = ToastQueue::default();
        let t0 = Instant::now();
        q.push(ToastKind::Error, "Failed to load domains list", t0, TTL);
        q.push(ToastKind::Info, "later", t0 + Duration::from_secs(1), TTL);

        q.expire(t0 + Duration::from_millis(2999));
        assert_eq!(q.len(), 2);
        q.expire(t0 + TTL);
        assert_eq!(q.len(), 1);
        assert_eq!(q.last().map(|t| t.message.as_str()), Some("later"));
        q.expire(t0 + Duration::from_secs(4));
        assert!(q.is_empty());
    }

    #[test]
    fn oldest_toast_is_dropped_when_full() {
        let mut q = ToastQueue::default();
        let t0 = Instant::now();
        for i in 0..=MAX_TOASTS {
            q.push(ToastKind::Info, format!("t{i}"), t0, TTL);
        }
        assert_eq!(q.len(), MAX_TOASTS);
        assert_eq!(q.iter().next().map(|t| t.message.as_str()), Some("t1"));
    }
}
