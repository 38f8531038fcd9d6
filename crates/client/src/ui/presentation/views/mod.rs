//! Top-level views

pub mod user_management;

pub use user_management::UserManagementView;
