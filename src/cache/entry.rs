//! Cache Entry Module
//!
//! A single memoized response body together with the timestamps bounding
//! its lifetime.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// One cached response body. Entries are written whole and replaced whole;
/// a stored body is never mutated in place.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Serialized response body, exactly as sent to the client
    pub body: String,
    /// When the body was stored (Unix milliseconds)
    pub stored_at: u64,
    /// When the entry stops being served (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Wraps a response body in an entry expiring `ttl_seconds` from now.
    pub fn new(body: String, ttl_seconds: u64) -> Self {
        let stored_at = now_ms();
        Self {
            body,
            stored_at,
            expires_at: stored_at + ttl_seconds * 1000,
        }
    }

    // == Is Expired ==
    /// An entry counts as expired from the exact millisecond `expires_at`
    /// is reached, so a body is never served past its TTL.
    pub fn is_expired(&self) -> bool {
        now_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Whole seconds until expiry, 0 once expired.
    pub fn ttl_remaining(&self) -> u64 {
        self.expires_at.saturating_sub(now_ms()) / 1000
    }
}

/// Current Unix time in milliseconds.
pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64
}
