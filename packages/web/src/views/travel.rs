use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn TravelPlanner() -> Element {
    let nav = use_navigator();

    let open_plan = move |id: i64| {
        nav.push(Route::TravelPlanDetail { id });
    };

    let to_login = move |_: ()| {
        nav.replace(Route::Login {});
    };

    rsx! {
        ui::views::TravelPlannerView {
            on_open_plan: open_plan,
            on_unauthenticated: to_login,
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
