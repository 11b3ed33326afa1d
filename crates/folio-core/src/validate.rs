//! Contact-form validation.
//!
//! The page has no contact form yet; the validator is the reusable piece a
//! future form submits through.

use regex::Regex;

const MIN_MESSAGE_CHARS: usize = 10;

/// Raw form input, fields absent until the user fills them
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Outcome of validating one form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

pub struct FormValidator {
    email_re: Regex,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            email_re: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"),
        }
    }

    /// Validate a submission; all fields are checked, not just the first bad one
    pub fn validate(&self, data: &FormData) -> Validation {
        let mut errors = FieldErrors::default();

        let email_ok = data
            .email
            .as_deref()
            .map(|email| self.email_re.is_match(email))
            .unwrap_or(false);
        if !email_ok {
            errors.email = Some("Valid email is required".to_string());
        }

        let message_ok = data
            .message
            .as_deref()
            .map(|message| message.trim().chars().count() >= MIN_MESSAGE_CHARS)
            .unwrap_or(false);
        if !message_ok {
            errors.message = Some(format!(
                "Message must be at least {} characters",
                MIN_MESSAGE_CHARS
            ));
        }

        Validation {
            is_valid: errors.email.is_none() && errors.message.is_none(),
            errors,
        }
    }
}
