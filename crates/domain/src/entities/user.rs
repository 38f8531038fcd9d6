//! User entity
//!
//! The user record the client creates. It has no identifier: identity and
//! uniqueness belong to the remote API that stores it.

use crate::value_objects::{EmailAddress, PersonName, PhoneNumber, StreetAddress};

/// A fully validated user, ready to be sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    first_name: PersonName,
    last_name: PersonName,
    email: EmailAddress,
    address: Option<StreetAddress>,
    phone: Option<PhoneNumber>,
}

impl User {
    pub fn new(first_name: PersonName, last_name: PersonName, email: EmailAddress) -> Self {
        Self {
            first_name,
            last_name,
            email,
            address: None,
            phone: None,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    pub fn with_address(mut self, address: Option<StreetAddress>) -> Self {
        self.address = address;
        self
    }

    pub fn with_phone(mut self, phone: Option<PhoneNumber>) -> Self {
        self.phone = phone;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn address(&self) -> Option<&StreetAddress> {
        self.address.as_ref()
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User::new(
            PersonName::first("Ada").expect("valid"),
            PersonName::last("Lovelace").expect("valid"),
            EmailAddress::new("ada@example.com").expect("valid"),
        )
    }

    #[test]
    fn optional_fields_default_to_absent() {
        let user = ada();
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert!(user.address().is_none());
        assert!(user.phone().is_none());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let user = ada()
            .with_phone(PhoneNumber::parse_optional("12345").expect("digits"))
            .with_address(StreetAddress::new(""));
        assert_eq!(user.phone().map(|p| p.as_str()), Some("12345"));
        assert!(user.address().is_none());
    }
}
