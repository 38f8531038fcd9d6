//! Form and list state containers

use dioxus::prelude::*;

use crate::application::{UserForm, UserList};

/// State of the create-user form
#[derive(Clone, Copy)]
pub struct UserFormState {
    pub form: Signal<UserForm>,
}

impl UserFormState {
    /// Create a pristine, empty form
    pub fn new() -> Self {
        Self {
            form: Signal::new(UserForm::new()),
        }
    }
}

impl Default for UserFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// State of the user list pane
#[derive(Clone, Copy)]
pub struct UserListState {
    pub list: Signal<UserList>,
}

impl UserListState {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            list: Signal::new(UserList::new()),
        }
    }
}

impl Default for UserListState {
    fn default() -> Self {
        Self::new()
    }
}
