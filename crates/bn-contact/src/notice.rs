//! Transient status notice shown after a submission.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::error::SubmitError;

pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";
pub const BUSY_MESSAGE: &str = "Your previous message is still being sent. Please wait.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Status banner that disappears after its time to live.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    fn new(kind: NoticeKind, message: String, now: DateTime<Utc>, ttl: Duration) -> Self {
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        Self {
            kind,
            message,
            issued_at: now,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    #[must_use]
    pub fn success(now: DateTime<Utc>, ttl: Duration) -> Self {
        Self::new(NoticeKind::Success, SUCCESS_MESSAGE.to_owned(), now, ttl)
    }

    #[must_use]
    pub fn failure(message: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self::new(NoticeKind::Failure, message.into(), now, ttl)
    }

    /// Notice describing the outcome of a submission.
    ///
    /// Validation errors name the offending field; delivery errors show the
    /// generic failure text.
    #[must_use]
    pub fn for_outcome(
        outcome: &Result<(), SubmitError>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        match outcome {
            Ok(()) => Self::success(now, ttl),
            Err(SubmitError::Invalid(err)) => {
                Self::failure(format!("Please check your input: {err}."), now, ttl)
            }
            Err(SubmitError::Busy) => Self::failure(BUSY_MESSAGE, now, ttl),
            Err(SubmitError::Delivery(_)) => Self::failure(FAILURE_MESSAGE, now, ttl),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }

    /// Whether the notice should no longer be shown at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Time left before expiry, zero once expired.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).to_std().unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeliveryError;
    use crate::form::FormError;
    use pretty_assertions::assert_eq;

    const TTL: Duration = Duration::from_secs(5);

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_expires_after_ttl() {
        let notice = Notice::success(at(0), TTL);

        assert!(!notice.is_expired(at(4)));
        assert!(notice.is_expired(at(5)));
        assert_eq!(notice.remaining(at(3)), Duration::from_secs(2));
        assert_eq!(notice.remaining(at(10)), Duration::ZERO);
    }

    #[test]
    fn test_outcome_messages() {
        let ok = Notice::for_outcome(&Ok(()), at(0), TTL);
        assert!(ok.is_success());
        assert_eq!(ok.message, SUCCESS_MESSAGE);

        let failed = Notice::for_outcome(
            &Err(SubmitError::Delivery(DeliveryError::NotConfigured)),
            at(0),
            TTL,
        );
        assert_eq!(failed.kind, NoticeKind::Failure);
        assert_eq!(failed.message, FAILURE_MESSAGE);

        let invalid = Notice::for_outcome(
            &Err(SubmitError::Invalid(FormError::InvalidEmail)),
            at(0),
            TTL,
        );
        assert_eq!(
            invalid.message,
            "Please check your input: email address is not valid."
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Notice::failure("nope", at(0), TTL)).unwrap();

        assert_eq!(json["kind"], "failure");
        assert_eq!(json["message"], "nope");
        assert!(json["expiresAt"].is_string());
    }
}
