//! Per-field validation of raw input.
//!
//! Each rule is the constructor of the matching value object, so the form
//! and the `User` entity cannot disagree about what is valid.

use crate::error::ValidationError;
use crate::field::UserField;
use crate::value_objects::{EmailAddress, PersonName, PhoneNumber};

/// Validate one raw field value.
///
/// `address` has no constraint and always passes.
pub fn validate_field(field: UserField, value: &str) -> Result<(), ValidationError> {
    match field {
        UserField::FirstName | UserField::LastName => PersonName::new(value, field).map(|_| ()),
        UserField::Email => EmailAddress::new(value).map(|_| ()),
        UserField::Phone => PhoneNumber::parse_optional(value).map(|_| ()),
        UserField::Address => Ok(()),
    }
}
