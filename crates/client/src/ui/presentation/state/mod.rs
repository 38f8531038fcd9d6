//! Reactive state shared through Dioxus context
//!
//! Each pane owns one signal. The application flows mutate them through
//! `StateCell`, which is what makes the UI re-render.

use dioxus::prelude::*;

use crate::application::{StateCell, UserForm, UserList};

mod user_state;

pub use user_state::{UserFormState, UserListState};

impl<T: 'static> StateCell<T> for Signal<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.write())
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.read())
    }
}

/// Hook to access the form signal from context
pub fn use_user_form() -> Signal<UserForm> {
    use_context::<UserFormState>().form
}

/// Hook to access the list signal from context
pub fn use_user_list() -> Signal<UserList> {
    use_context::<UserListState>().list
}
