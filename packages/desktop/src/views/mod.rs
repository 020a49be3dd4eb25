use dioxus::prelude::*;

use crate::Route;

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

#[component]
pub fn TravelPlanner() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::TravelPlannerView {
            on_open_plan: move |id: i64| {
                nav.push(Route::TravelPlanDetail { id });
            },
            on_unauthenticated: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn TravelPlanDetail(id: i64) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::TravelPlanDetailView {
            plan_id: id,
            on_back: move |_| {
                nav.push(Route::TravelPlanner {});
            },
        }
    }
}
