//! Field validation errors
//!
//! A `ValidationError` is local and synchronous: it names the offending
//! field and renders as the inline message shown next to it.

use thiserror::Error;

use crate::field::UserField;

/// A user field that breaks one of its invariants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty (after trimming)
    #[error("{} is required", .0.label())]
    Required(UserField),

    /// Email is present but not email-shaped
    #[error("Invalid email")]
    InvalidEmail,

    /// Phone contains something other than ASCII digits
    #[error("Phone number must be digits")]
    NonDigitPhone,
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> UserField {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::InvalidEmail => UserField::Email,
            ValidationError::NonDigitPhone => UserField::Phone,
        }
    }
}
