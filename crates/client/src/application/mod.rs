//! Application layer: typed API access, services, and the two UI-agnostic
//! components (form controller, list viewer).

pub mod api;
pub mod dto;
pub mod form_controller;
pub mod list_viewer;
pub mod services;
pub mod state_cell;

pub use form_controller::{SubmitError, SubmitOutcome, UserForm, UserFormValues};
pub use list_viewer::{RefreshOutcome, UserList, EMPTY_LIST_MESSAGE};
pub use state_cell::StateCell;
