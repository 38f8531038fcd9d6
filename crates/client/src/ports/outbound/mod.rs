//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the user API without depending on
//! a concrete HTTP client.

pub mod api_port;
pub mod raw_api_port;
pub mod testing;

pub use api_port::{ApiPort, NetworkError};
pub use raw_api_port::RawApiPort;
