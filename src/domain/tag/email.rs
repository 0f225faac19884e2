//! Signer-email placeholder tags
//!
//! Independent of the field-tag encoder: the output carries the signer's
//! email and invite order instead of field geometry.

use crate::error::{Result, SigtagError};
use regex::Regex;
use std::sync::OnceLock;

/// Shape check only, not RFC validation: one `@` with at least one `.` after it
fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").unwrap())
}

/// A signer-email placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailTag {
    /// Role of the signer
    pub role: String,

    /// Signer's email address
    pub email: String,

    /// Signing order, starting at 1
    pub order: i64,
}

impl EmailTag {
    /// Create a placeholder with the default order of 1
    pub fn new(role: impl Into<String>, email: impl Into<String>) -> Self {
        EmailTag {
            role: role.into(),
            email: email.into(),
            order: 1,
        }
    }

    /// Set the signing order
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Encode the placeholder into a text tag.
    ///
    /// Role and email are interpolated verbatim; embedded double quotes are
    /// not escaped.
    ///
    /// # Errors
    ///
    /// Returns an error if the email does not match the expected shape.
    pub fn encode(&self) -> Result<String> {
        if !email_regex().is_match(&self.email) {
            return Err(SigtagError::InvalidArgument(
                "Invalid email address".to_string(),
            ));
        }
        Ok(format!(
            "{{{{t:e;o:\"{}\";e:\"{}\";order:{};}}}}",
            self.role, self.email, self.order
        ))
    }
}
