//! Transient, auto-dismissing notifications shown under the form.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

const MAX_VISIBLE_NOTICES: usize = 3;
pub const MAX_NOTICE_LIFETIME: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: &'static str,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct NoticeQueue {
    lifetime: Duration,
    next_id: u64,
    notices: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime: lifetime.min(MAX_NOTICE_LIFETIME),
            next_id: 0,
            notices: VecDeque::new(),
        }
    }

    pub fn push(&mut self, title: &'static str, message: impl Into<String>, now: Instant) {
        if self.notices.len() == MAX_VISIBLE_NOTICES {
            self.notices.pop_front();
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.notices.push_back(Notice {
            id,
            title,
            message: message.into(),
            expires_at: now.checked_add(self.lifetime).unwrap_or(now),
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }

    /// Drops expired notices and returns how long until the next one expires.
    pub fn prune(&mut self, now: Instant) -> Option<Duration> {
        self.notices.retain(|notice| notice.expires_at > now);
        self.notices
            .iter()
            .map(|notice| notice.expires_at.saturating_duration_since(now))
            .min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.notices.len()
    }
}
