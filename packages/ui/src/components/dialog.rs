use dioxus::prelude::*;

/// Modal dialog. Renders nothing while closed.
/// Clicking the backdrop triggers `on_close`; clicks inside the card do not.
#[component]
pub fn Dialog(open: bool, title: String, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog-card",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h2 { class: "dialog-title", "{title}" }
                {children}
            }
        }
    }
}
