//! Submission throttle with injected state.
//!
//! The throttle owns no storage. Callers pass a `ThrottleStore`, so the
//! same policy runs against process memory, a session or a database row.

use super::ContactError;
use serde::{Deserialize, Serialize};

/// Default submissions allowed per window.
pub const DEFAULT_MAX_SUBMISSIONS: u32 = 3;
/// Default window length: one hour.
pub const DEFAULT_WINDOW_MS: i64 = 60 * 60 * 1000;

/// Persisted throttle counters for one client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleState {
    /// Accepted submissions in the current window.
    pub submissions: u32,
    /// Unix epoch milliseconds at which the window resets.
    pub window_expires_at_ms: i64,
}

impl ThrottleState {
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.window_expires_at_ms
    }
}

/// Storage contract for throttle state.
pub trait ThrottleStore {
    fn get(&self) -> Option<ThrottleState>;
    fn set(&mut self, state: ThrottleState);
    fn reset(&mut self);
}

/// In-process throttle store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryThrottleStore {
    state: Option<ThrottleState>,
}

impl MemoryThrottleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThrottleStore for MemoryThrottleStore {
    fn get(&self) -> Option<ThrottleState> {
        self.state
    }

    fn set(&mut self, state: ThrottleState) {
        self.state = Some(state);
    }

    fn reset(&mut self) {
        self.state = None;
    }
}

/// Submission quota per fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottlePolicy {
    pub max_submissions: u32,
    pub window_ms: i64,
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            max_submissions: DEFAULT_MAX_SUBMISSIONS,
            window_ms: DEFAULT_WINDOW_MS,
        }
    }
}

/// Counts one submission against the quota and persists the new state.
///
/// A missing or expired state opens a new window starting at `now_ms`.
///
/// # Errors
/// - `ContactError::RateLimited` when the window is already full. The
///   stored state is left unchanged.
pub fn record_submission<S: ThrottleStore>(
    store: &mut S,
    policy: &ThrottlePolicy,
    now_ms: i64,
) -> Result<ThrottleState, ContactError> {
    let current = match store.get() {
        Some(state) if !state.is_expired(now_ms) => state,
        _ => fresh_window(policy, now_ms),
    };

    if current.submissions >= policy.max_submissions {
        return Err(ContactError::RateLimited {
            retry_after_ms: current.window_expires_at_ms - now_ms,
        });
    }

    let next = ThrottleState {
        submissions: current.submissions + 1,
        ..current
    };
    store.set(next);
    Ok(next)
}

fn fresh_window(policy: &ThrottlePolicy, now_ms: i64) -> ThrottleState {
    ThrottleState {
        submissions: 0,
        window_expires_at_ms: now_ms.saturating_add(policy.window_ms),
    }
}
