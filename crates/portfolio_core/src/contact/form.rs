//! Contact form model, validation and submission entry point.

use super::throttle::{record_submission, ThrottlePolicy, ThrottleStore};
use super::ContactError;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 5000;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

/// Raw contact form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validates fields after trimming surrounding whitespace.
    ///
    /// Rules:
    /// - `name`: 1 to [`NAME_MAX_CHARS`] chars.
    /// - `email`: `local@domain.tld` shape, no whitespace.
    /// - `message`: [`MESSAGE_MIN_CHARS`] to [`MESSAGE_MAX_CHARS`] chars.
    pub fn validate(&self) -> Result<(), ContactError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(invalid("name", "cannot be empty"));
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(invalid("name", "is too long"));
        }

        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(invalid("email", "is not a valid address"));
        }

        let message_chars = self.message.trim().chars().count();
        if message_chars < MESSAGE_MIN_CHARS {
            return Err(invalid("message", "is too short"));
        }
        if message_chars > MESSAGE_MAX_CHARS {
            return Err(invalid("message", "is too long"));
        }
        Ok(())
    }
}

/// Acceptance receipt handed to the delivery layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    /// Unix epoch milliseconds.
    pub accepted_at_ms: i64,
    /// Submissions left in the current throttle window.
    pub remaining_in_window: u32,
}

/// Validates, throttles and accepts one contact submission.
///
/// # Errors
/// - `InvalidField` when validation fails; throttle state is untouched.
/// - `RateLimited` when the current window is exhausted.
pub fn submit_contact<S: ThrottleStore>(
    form: &ContactForm,
    store: &mut S,
    policy: &ThrottlePolicy,
    now_ms: i64,
) -> Result<SubmissionReceipt, ContactError> {
    if let Err(err) = form.validate() {
        warn!("event=contact_submit module=contact status=rejected reason=validation error={err}");
        return Err(err);
    }

    let state = match record_submission(store, policy, now_ms) {
        Ok(state) => state,
        Err(err) => {
            warn!("event=contact_submit module=contact status=rejected reason=rate_limited");
            return Err(err);
        }
    };

    let receipt = SubmissionReceipt {
        submission_id: Uuid::new_v4(),
        accepted_at_ms: now_ms,
        remaining_in_window: policy.max_submissions.saturating_sub(state.submissions),
    };
    info!(
        "event=contact_submit module=contact status=ok submission_id={} remaining={}",
        receipt.submission_id, receipt.remaining_in_window
    );
    Ok(receipt)
}

fn invalid(field: &'static str, reason: &'static str) -> ContactError {
    ContactError::InvalidField { field, reason }
}
