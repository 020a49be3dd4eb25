use dioxus::prelude::*;

use crate::icons::FaCircleExclamation;
use crate::Icon;

/// Red warning box with an alert icon.
#[component]
pub fn Callout(children: Element) -> Element {
    rsx! {
        div {
            class: "callout callout-error",
            role: "alert",
            Icon { width: 16, height: 16, fill: "currentColor", icon: FaCircleExclamation }
            span { class: "callout-text", {children} }
        }
    }
}
