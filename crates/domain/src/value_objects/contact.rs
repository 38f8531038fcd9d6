//! Contact details: email, phone, and postal address

use std::fmt;

use validator::ValidateEmail;

use crate::error::ValidationError;
use crate::field::UserField;

// ============================================================================
// EmailAddress
// ============================================================================

/// A required, email-shaped address, kept exactly as entered
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    ///
    /// - `ValidationError::Required(UserField::Email)` if empty after trimming
    /// - `ValidationError::InvalidEmail` if the value is not email-shaped
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required(UserField::Email));
        }
        if !trimmed.validate_email() {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// PhoneNumber
// ============================================================================

/// A phone number made only of ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonDigitPhone` if the value is empty or
    /// contains anything but `0-9`, whitespace included.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NonDigitPhone);
        }
        Ok(Self(phone))
    }

    /// Parse an optional phone: only the empty string means "no phone".
    pub fn parse_optional(phone: &str) -> Result<Option<Self>, ValidationError> {
        if phone.is_empty() {
            return Ok(None);
        }
        Self::new(phone).map(Some)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// StreetAddress
// ============================================================================

/// Free-text postal address. Never empty; absence is `Option::None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreetAddress(String);

impl StreetAddress {
    /// Returns `None` for blank input; anything else is kept as entered.
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            None
        } else {
            Some(Self(address))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
