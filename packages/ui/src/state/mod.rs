//! Page state controllers, independent of rendering.
//!
//! The async flows take their state through [`StateCell`], so the views can
//! hand in their `Signal`s and tests can hand in plain `&mut` values. No borrow
//! of the state is held across an `.await`.

use dioxus::prelude::*;

pub mod login;
pub mod plans;

pub use login::{submit_login, LoginForm};
pub use plans::{create_and_refresh, CreatePlanForm, FetchStatus, PlanList, Sections};

/// Short-lived mutable access to a piece of page state.
pub trait StateCell<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> StateCell<T> for &mut T {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(self)
    }
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut state = self.write();
        f(&mut state)
    }
}
