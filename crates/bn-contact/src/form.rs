//! Contact form input and validation.

use serde::{Deserialize, Serialize};

/// Longest accepted name, in characters.
pub const MAX_NAME_CHARS: usize = 200;
/// Longest accepted message, in characters.
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Contact form fields as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Reason a form was rejected before delivery.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A required field is blank.
    #[error("{0} is required")]
    EmptyField(&'static str),
    /// Email address is not of the form `local@domain.tld`.
    #[error("email address is not valid")]
    InvalidEmail,
    /// A field exceeds its length limit.
    #[error("{field} must be at most {max} characters")]
    TooLong {
        field: &'static str,
        max: usize,
    },
}

impl ContactForm {
    #[must_use]
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

    /// Trim the fields and check them.
    ///
    /// Returns the trimmed form on success.
    pub fn validated(&self) -> Result<Self, FormError> {
        let form = Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
        };

        if form.name.is_empty() {
            return Err(FormError::EmptyField("name"));
        }
        if form.email.is_empty() {
            return Err(FormError::EmptyField("email"));
        }
        if form.message.is_empty() {
            return Err(FormError::EmptyField("message"));
        }
        if form.name.chars().count() > MAX_NAME_CHARS {
            return Err(FormError::TooLong {
                field: "name",
                max: MAX_NAME_CHARS,
            });
        }
        if form.message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(FormError::TooLong {
                field: "message",
                max: MAX_MESSAGE_CHARS,
            });
        }
        if !is_plausible_email(&form.email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(form)
    }
}

/// Shape check only: one `@`, non-empty local part, dotted domain, no spaces.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !host.starts_with('.')
}
