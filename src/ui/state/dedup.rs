// SPDX-License-Identifier: MPL-2.0
//! Time-windowed token set for duplicate-invocation suppression.
//!
//! Host action layers can deliver the same seek twice within one logical
//! event. Each invocation carries an identifying token; a token seen again
//! inside the window is a duplicate and must not re-apply. Expired entries
//! are swept on each insert, so no background timer is involved.

use std::time::{Duration, Instant};

/// Recently seen invocation tokens with explicit expiry.
#[derive(Debug, Clone)]
pub struct RecentTokens {
    window: Duration,
    entries: Vec<(u64, Instant)>,
}

impl RecentTokens {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entries: Vec::new(),
        }
    }

    /// Records a token. Returns `false` when the token was already seen
    /// within the window, in which case the caller drops the invocation.
    pub fn insert(&mut self, token: u64, now: Instant) -> bool {
        let window = self.window;
        self.entries
            .retain(|(_, seen)| now.saturating_duration_since(*seen) < window);

        if self.entries.iter().any(|(existing, _)| *existing == token) {
            return false;
        }
        self.entries.push((token, now));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_is_accepted() {
        let mut tokens = RecentTokens::new(Duration::from_millis(50));
        assert!(tokens.insert(7, Instant::now()));
    }

    #[test]
    fn repeat_within_window_is_rejected() {
        let now = Instant::now();
        let mut tokens = RecentTokens::new(Duration::from_millis(50));
        assert!(tokens.insert(7, now));
        assert!(!tokens.insert(7, now + Duration::from_millis(10)));
    }

    #[test]
    fn repeat_after_window_is_accepted() {
        let now = Instant::now();
        let mut tokens = RecentTokens::new(Duration::from_millis(50));
        assert!(tokens.insert(7, now));
        assert!(tokens.insert(7, now + Duration::from_millis(60)));
    }

    #[test]
    fn distinct_tokens_do_not_collide() {
        let now = Instant::now();
        let mut tokens = RecentTokens::new(Duration::from_millis(50));
        assert!(tokens.insert(7, now));
        assert!(tokens.insert(8, now));
    }

    #[test]
    fn expired_entries_are_swept() {
        let now = Instant::now();
        let mut tokens = RecentTokens::new(Duration::from_millis(50));
        for token in 0..10 {
            assert!(tokens.insert(token, now));
        }
        assert!(tokens.insert(100, now + Duration::from_millis(60)));
        assert_eq!(tokens.entries.len(), 1);
    }
}
