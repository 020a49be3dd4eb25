use dioxus::prelude::*;

/// Card previewing one plan: a cover image (or a plain sky gradient) and the title.
#[component]
pub fn PreviewFrame(
    plan_id: i64,
    title: String,
    image_url: Option<String>,
    on_open: EventHandler<i64>,
) -> Element {
    let cover = match image_url {
        Some(url) => format!("background-image: url('{url}')"),
        None => "background-image: linear-gradient(135deg, #5b8def, #a3c4f3)".to_string(),
    };

    rsx! {
        div {
            class: "preview-frame",
            onclick: move |_| on_open.call(plan_id),
            div { class: "preview-cover", style: "{cover}" }
            div { class: "preview-title", "{title}" }
        }
    }
}
