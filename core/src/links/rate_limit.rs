//! Per-key cooldowns for rickroll checks.

use core::hash::Hash;
use core::time::Duration;
use std::time::Instant;

use hashbrown::HashMap;

use crate::api::ScanOptions;

/// Remembers when each key was last accepted.
///
/// A request arriving strictly between zero and `window` after the last
/// accepted one is limited, and does not restart the cooldown. Anything else
/// (first request, a request after the window, or a clock that went
/// backwards) is accepted and becomes the new reference point.
///
/// Time is passed in by the caller.
#[derive(Debug, Clone)]
pub struct RateLimiter<K> {
    window: Duration,
    accepted: HashMap<K, Instant>,
}

impl<K: Hash + Eq> RateLimiter<K> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            accepted: HashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns true when `key` is still cooling down at `now`.
    pub fn is_limited(&mut self, key: K, now: Instant) -> bool {
        if let Some(last) = self.accepted.get(&key) {
            let elapsed = now.saturating_duration_since(*last);
            if !elapsed.is_zero() && elapsed < self.window {
                return true;
            }
        }
        self.accepted.insert(key, now);
        false
    }
}

/// Reply to a rickroll check requested while still cooling down.
pub const COOLDOWN_REPLY: &str = "Please wait before calling this command again.";

/// The pair of limiters guarding a rickroll check: one per requesting user,
/// one per inspected message.
#[derive(Debug, Clone)]
pub struct Cooldowns<U, M> {
    pub users: RateLimiter<U>,
    pub messages: RateLimiter<M>,
}

impl<U: Hash + Eq, M: Hash + Eq> Cooldowns<U, M> {
    pub fn new(options: &ScanOptions) -> Self {
        Self {
            users: RateLimiter::new(options.user_cooldown),
            messages: RateLimiter::new(options.message_cooldown),
        }
    }

    /// Returns true when the request must be refused.
    ///
    /// The message limiter is only consulted (and only records the request)
    /// when the user is not limited.
    pub fn is_limited(&mut self, user: U, message: M, now: Instant) -> bool {
        self.users.is_limited(user, now) || self.messages.is_limited(message, now)
    }
}
