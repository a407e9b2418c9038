//! Contact form delivery for the Bootnode site.
//!
//! A [`ContactDesk`] validates a [`ContactForm`], guards against concurrent
//! submissions and hands the message to an [`EmailSender`]. The outcome is
//! turned into a short-lived [`Notice`] for the visitor.
//!
//! [`EmailJsSender`] talks to an EmailJS-compatible REST API using a blocking
//! `ureq` agent; the desk runs it on Tokio's blocking pool.

mod desk;
mod error;
mod form;
mod notice;
mod sender;

pub use desk::ContactDesk;
pub use error::{DeliveryError, SubmitError};
pub use form::{ContactForm, FormError, MAX_MESSAGE_CHARS, MAX_NAME_CHARS};
pub use notice::{BUSY_MESSAGE, FAILURE_MESSAGE, Notice, NoticeKind, SUCCESS_MESSAGE};
pub use sender::{EmailJsSender, EmailSender};
