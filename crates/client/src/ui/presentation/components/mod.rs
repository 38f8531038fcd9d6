//! Reusable UI components

pub mod user_form;
pub mod user_list;

pub use user_form::UserFormPanel;
pub use user_list::UserListPanel;
