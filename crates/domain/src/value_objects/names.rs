//! Validated person name newtype
//!
//! Names are valid by construction: non-empty after trimming. The stored
//! text is exactly what was entered.

use std::fmt;

use crate::error::ValidationError;
use crate::field::UserField;

// ============================================================================
// PersonName
// ============================================================================

/// A validated first or last name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new validated name for `field`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Required(field)` if the name is empty after
    /// trimming.
    pub fn new(name: impl Into<String>, field: UserField) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Required(field));
        }
        Ok(Self(name))
    }

    /// Convenience for `PersonName::new(name, UserField::FirstName)`.
    pub fn first(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, UserField::FirstName)
    }

    /// Convenience for `PersonName::new(name, UserField::LastName)`.
    pub fn last(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, UserField::LastName)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> String {
        name.0
    }
}
