//! Rate limiting middleware
//!
//! Sliding-window admission gate for write commands. Each session owns its
//! own limiter instance; there is no shared global state.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Sliding-window rate limiter.
///
/// Records the timestamp of each admitted call and rejects once `max_calls`
/// timestamps fall inside the window. Timestamps are appended in
/// chronological order, so expiry is a prefix eviction from the front.
/// A rejected call records nothing.
pub struct RateLimiter {
    calls: VecDeque<Instant>,
    max_calls: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_calls: usize, window: Duration) -> Self {
        Self {
            calls: VecDeque::new(),
            max_calls,
            window,
        }
    }

    /// Check whether a call is admitted right now, recording it if so.
    pub fn check(&mut self) -> bool {
        self.check_at(Instant::now())
    }

    fn check_at(&mut self, now: Instant) -> bool {
        // Evict timestamps that have fallen out of the window
        while let Some(&oldest) = self.calls.front() {
            if now.duration_since(oldest) > self.window {
                self.calls.pop_front();
            } else {
                break;
            }
        }

        if self.calls.len() < self.max_calls {
            self.calls.push_back(now);
            true
        } else {
            false
        }
    }

    /// Number of calls currently counted against the window.
    pub fn active_calls(&self) -> usize {
        self.calls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_up_to_max_then_rejects() {
        let mut limiter = RateLimiter::new(3, Duration::from_secs(1));
        let now = Instant::now();

        assert!(limiter.check_at(now));
        assert!(limiter.check_at(now));
        assert!(limiter.check_at(now));
        assert!(!limiter.check_at(now));
        assert_eq!(limiter.active_calls(), 3);
    }

    #[test]
    fn rejection_records_nothing() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(1));
        let now = Instant::now();

        assert!(limiter.check_at(now));
        assert!(!limiter.check_at(now));
        assert!(!limiter.check_at(now));
        assert_eq!(limiter.active_calls(), 1);
    }

    #[test]
    fn window_expiry_readmits() {
        let window = Duration::from_millis(500);
        let mut limiter = RateLimiter::new(2, window);
        let start = Instant::now();

        assert!(limiter.check_at(start));
        assert!(limiter.check_at(start));
        assert!(!limiter.check_at(start));

        // Advance the simulated clock past the window
        let later = start + window + Duration::from_millis(1);
        assert!(limiter.check_at(later));
        assert_eq!(limiter.active_calls(), 1);
    }

    #[test]
    fn boundary_timestamp_still_counts() {
        // A call exactly `window` old is still inside the window
        let window = Duration::from_millis(500);
        let mut limiter = RateLimiter::new(1, window);
        let start = Instant::now();

        assert!(limiter.check_at(start));
        assert!(!limiter.check_at(start + window));
    }

    #[test]
    fn partial_expiry_frees_partial_capacity() {
        let window = Duration::from_millis(100);
        let mut limiter = RateLimiter::new(2, window);
        let start = Instant::now();

        assert!(limiter.check_at(start));
        assert!(limiter.check_at(start + Duration::from_millis(80)));

        // First call has expired, second has not
        let later = start + Duration::from_millis(150);
        assert!(limiter.check_at(later));
        assert!(!limiter.check_at(later));
    }
}
