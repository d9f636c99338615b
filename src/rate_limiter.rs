//! In-memory rate limiter guarding the upstream completion API.
//!
//! One instance is constructed at startup and shared through `AppState`;
//! tests build their own instances with small windows.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Sliding-window request counter: at most `max_requests` admitted attempts
/// in the trailing `window`.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    requests: Mutex<Vec<Instant>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Limits tuned for the hosted API's 15/min cap, with headroom.
    pub fn for_chat() -> Self {
        Self::new(12, Duration::from_secs(60))
    }

    /// True iff the request is admitted; an admitted request is recorded.
    pub fn can_make_request(&self) -> bool {
        let now = Instant::now();
        let mut requests = self.requests.lock().unwrap();
        requests.retain(|at| now.duration_since(*at) < self.window);

        if requests.len() < self.max_requests {
            requests.push(now);
            true
        } else {
            false
        }
    }

    /// Seconds until the oldest recorded attempt leaves the window, rounded
    /// up. 0 when nothing is recorded.
    pub fn wait_time_secs(&self) -> u64 {
        let requests = self.requests.lock().unwrap();
        let Some(oldest) = requests.iter().min() else {
            return 0;
        };
        let elapsed = oldest.elapsed();
        if elapsed >= self.window {
            0
        } else {
            (self.window - elapsed).as_secs_f64().ceil() as u64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_up_to_the_cap_then_rejects() {
        let limiter = RateLimiter::new(12, Duration::from_secs(60));
        for i in 0..12 {
            assert!(limiter.can_make_request(), "request {} should pass", i + 1);
        }
        assert!(!limiter.can_make_request(), "13th request must be rejected");
    }

    #[test]
    fn admits_again_after_window_elapses() {
        let limiter = RateLimiter::new(2, Duration::from_millis(40));
        assert!(limiter.can_make_request());
        assert!(limiter.can_make_request());
        assert!(!limiter.can_make_request());

        std::thread::sleep(Duration::from_millis(60));
        assert!(limiter.can_make_request());
    }

    #[test]
    fn wait_time_is_zero_when_idle() {
        let limiter = RateLimiter::for_chat();
        assert_eq!(limiter.wait_time_secs(), 0);
    }

    #[test]
    fn wait_time_hints_at_window_remainder() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.can_make_request());
        let wait = limiter.wait_time_secs();
        assert!(wait >= 1 && wait <= 60, "unexpected wait hint: {wait}");
    }

    #[test]
    fn rejection_does_not_consume_a_slot() {
        let limiter = RateLimiter::new(1, Duration::from_millis(40));
        assert!(limiter.can_make_request());
        assert!(!limiter.can_make_request());
        std::thread::sleep(Duration::from_millis(60));
        // Only the admitted attempt was recorded, so the window clears fully.
        assert!(limiter.can_make_request());
    }
}
