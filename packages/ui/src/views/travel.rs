//! Travel planner dashboard: hero with the create dialog, preview cards and the plan grid.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::state::{create_and_refresh, CreatePlanForm, PlanList};
use crate::{make_api, use_session, CreatePlanDialog, LogoutButton, PlanGrid, PreviewFrame};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared dashboard view.
///
/// Fetches the plan list once on mount. Creating a plan posts the title and, on
/// success, closes the dialog and refetches the whole list.
#[component]
pub fn TravelPlannerView(
    /// Called with a plan id when its preview card is clicked.
    on_open_plan: EventHandler<i64>,
    /// Called when there is no session, on mount or after logging out.
    on_unauthenticated: EventHandler<()>,
) -> Element {
    let session = use_session();
    let api = use_hook(make_api);
    let plans = use_signal(PlanList::default);
    let mut dialog = use_signal(CreatePlanForm::default);

    use_effect(move || {
        if !session().is_authenticated() {
            on_unauthenticated.call(());
        }
    });

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            let current = session.peek().clone();
            PlanList::refresh(plans, &api, &current).await;
        }
    });

    let handle_create = move |_| {
        let api = api.clone();
        spawn(async move {
            let current = session.peek().clone();
            create_and_refresh(dialog, plans, &api, &current).await;
        });
    };

    let list = plans();
    let sections = list.sections();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "travel-page",

            section {
                class: "travel-hero",
                div { class: "travel-hero-shade" }
                div {
                    class: "travel-hero-content",
                    div {
                        class: "travel-hero-top",
                        h1 { class: "travel-hero-title", "Travel Planner" }
                        LogoutButton {}
                    }
                    p {
                        class: "travel-hero-text",
                        "Plan your trips effortlessly with our travel planner."
                        br {}
                        "Create, view, and manage your travel plans all in one place."
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "travel-hero-button",
                        onclick: move |_| dialog.write().open_dialog(),
                        "Create New Travel Plan"
                    }
                }
            }

            CreatePlanDialog {
                form: dialog,
                on_create: handle_create,
            }

            if sections.continue_heading {
                h2 { class: "travel-heading", "Continue planning your next journey..." }
            }

            if sections.previews {
                div {
                    class: "travel-previews",
                    for plan in list.plans().iter() {
                        PreviewFrame {
                            key: "{plan.id}",
                            plan_id: plan.id,
                            title: plan.title.clone(),
                            on_open: on_open_plan,
                        }
                    }
                }
            }

            h2 { class: "travel-heading", "All trips" }

            div {
                class: "travel-grid",
                if sections.loading {
                    p { class: "travel-loading", "Loading..." }
                }
                if sections.empty_message {
                    p {
                        class: "travel-empty",
                        i { "No travel plans available." }
                    }
                }
                if sections.grid {
                    PlanGrid { plans: list.plans().to_vec() }
                }
            }
        }
    }
}
