use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::state::PlanList;
use crate::{make_api, use_session};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

fn date_label(date: Option<impl std::fmt::Display>) -> String {
    date.map(|d| d.to_string())
        .unwrap_or_else(|| "Not set".to_string())
}

/// Read-only page for one plan, looked up in a fresh copy of the list.
#[component]
pub fn TravelPlanDetailView(plan_id: i64, on_back: EventHandler<()>) -> Element {
    let session = use_session();
    let api = use_hook(make_api);
    let plans = use_signal(PlanList::default);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let current = session.peek().clone();
            PlanList::refresh(plans, &api, &current).await;
        }
    });

    let list = plans();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "plan-detail",

            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_back.call(()),
                "Back to all trips"
            }

            if session().is_authenticated() && !list.fetched() {
                p { class: "plan-detail-status", "Loading..." }
            } else if let Some(plan) = list.find(plan_id) {
                h1 { class: "plan-detail-title", "{plan.title}" }
                dl {
                    class: "plan-detail-fields",
                    dt { "Start date" }
                    dd { "{date_label(plan.start_date)}" }
                    dt { "End date" }
                    dd { "{date_label(plan.end_date)}" }
                    dt { "Description" }
                    dd { "{plan.description}" }
                }
            } else {
                p { class: "plan-detail-status", "Travel plan not found." }
            }
        }
    }
}
