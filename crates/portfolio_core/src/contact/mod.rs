//! Contact form intake.
//!
//! # Responsibility
//! - Validate contact submissions before they reach any relay.
//! - Throttle submissions through explicitly injected state.
//! - Issue receipts for accepted submissions.
//!
//! # Invariants
//! - Invalid forms never consume throttle quota.
//! - Throttle state is only read and written through `ThrottleStore`.
//! - Delivery (email relay) is outside core.

pub mod form;
pub mod throttle;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Contact intake error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// One form field failed validation.
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
    /// Submission quota exhausted for the current window.
    RateLimited { retry_after_ms: i64 },
}

impl Display for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField { field, reason } => write!(f, "invalid {field}: {reason}"),
            Self::RateLimited { retry_after_ms } => write!(
                f,
                "too many submissions; retry in {} seconds",
                retry_after_ms.saturating_add(999) / 1000
            ),
        }
    }
}

impl Error for ContactError {}
