use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Dialog, Input};
use crate::state::CreatePlanForm;

/// Modal form for creating a new travel plan from a title.
#[component]
pub fn CreatePlanDialog(
    form: Signal<CreatePlanForm>,
    on_create: EventHandler<()>,
) -> Element {
    let mut form = form;
    let state = form();

    rsx! {
        Dialog {
            open: state.open,
            title: "Create New Travel Plan",
            on_close: move |_| form.write().close_dialog(),

            Input {
                id: "new-travel-plan-title",
                class: "w-full",
                placeholder: "Enter title for your new travel plan...",
                value: state.title.clone(),
                oninput: move |evt: FormEvent| form.write().set_title(evt.value()),
            }

            div {
                class: "dialog-actions",
                Button {
                    variant: ButtonVariant::Soft,
                    onclick: move |_| form.write().close_dialog(),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_create.call(()),
                    "Create"
                }
            }
        }
    }
}
