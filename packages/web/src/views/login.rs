//! Login page view.

use dioxus::prelude::*;

use crate::Route;

/// Login page component. Moves on to the dashboard once a session exists.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::LoginView {
            on_logged_in: move |_| {
                nav.replace(Route::TravelPlanner {});
            },
        }
    }
}
