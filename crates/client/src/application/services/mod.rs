//! Application services
//!
//! Services implement the client's use cases. They depend on port traits,
//! not concrete infrastructure implementations.

pub mod user_service;

pub use user_service::UserService;
