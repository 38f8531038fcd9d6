//! Value objects - Immutable objects defined by their attributes

mod contact;
mod names;

pub use contact::{EmailAddress, PhoneNumber, StreetAddress};
pub use names::PersonName;
