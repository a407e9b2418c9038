//! Error types for contact delivery.

use crate::form::FormError;

/// Error from the email delivery API.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// No `[contact]` section is configured.
    #[error("email delivery is not configured")]
    NotConfigured,

    /// The blocking delivery task panicked or was cancelled.
    #[error("delivery task failed: {0}")]
    Task(String),
}

/// Why a submission did not produce a sent message.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Form failed validation; nothing was sent.
    #[error("invalid form: {0}")]
    Invalid(#[from] FormError),

    /// Another submission is still in flight.
    #[error("a submission is already in progress")]
    Busy,

    /// Delivery was attempted and failed.
    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}
