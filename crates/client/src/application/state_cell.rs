//! Observable state cells
//!
//! The form and list flows mutate their state through this trait so they can
//! run against Dioxus signals in the UI and against plain `RefCell`s in tests.
//! Closures passed to `update` must not await.

use std::cell::RefCell;
use std::rc::Rc;

pub trait StateCell<T> {
    /// Mutate the held value and notify subscribers.
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;

    /// Read the held value without notifying.
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}
