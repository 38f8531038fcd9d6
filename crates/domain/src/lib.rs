//! userdesk domain.
//!
//! Framework-free types for the user record managed by the client:
//! the `User` entity, the value objects it is built from, and the
//! field-scoped `ValidationError` raised when raw input breaks an invariant.

pub mod entities;
pub mod error;
pub mod field;
pub mod validation;
pub mod value_objects;

pub use entities::User;
pub use error::ValidationError;
pub use field::UserField;
pub use validation::validate_field;
pub use value_objects::{EmailAddress, PersonName, PhoneNumber, StreetAddress};
