//! Identifiers for the five user fields

use std::fmt;

/// One of the five fields of a user record.
///
/// Ordering follows the on-screen order of the form, so maps keyed by
/// `UserField` iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    Address,
    Phone,
}

impl UserField {
    /// All fields in form order.
    pub const ALL: [UserField; 5] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::Email,
        UserField::Address,
        UserField::Phone,
    ];

    /// Human-readable label, as shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            UserField::FirstName => "First Name",
            UserField::LastName => "Last Name",
            UserField::Email => "Email",
            UserField::Address => "Address",
            UserField::Phone => "Phone",
        }
    }

    /// Wire/input name of the field (`first_name`, `last_name`, ...).
    pub fn key(self) -> &'static str {
        match self {
            UserField::FirstName => "first_name",
            UserField::LastName => "last_name",
            UserField::Email => "email",
            UserField::Address => "address",
            UserField::Phone => "phone",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            UserField::FirstName | UserField::LastName | UserField::Email
        )
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_form_order() {
        let keys: Vec<_> = UserField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            vec!["first_name", "last_name", "email", "address", "phone"]
        );
    }

    #[test]
    fn only_names_and_email_are_required() {
        let required: Vec<_> = UserField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(
            required,
            vec![UserField::FirstName, UserField::LastName, UserField::Email]
        );
    }
}
