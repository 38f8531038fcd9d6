//! Data transfer objects
//!
//! DTOs carry data between the API and the presentation layer so that
//! presentation doesn't need to import from infrastructure.

pub mod user_record;

pub use user_record::UserRecord;
