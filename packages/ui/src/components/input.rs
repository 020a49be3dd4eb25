use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: html_for,
            {children}
        }
    }
}

/// Text-like input. `required` and `type` are left to the browser's native validation.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] name: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: id,
            name: name,
            class: "input {class}",
            r#type: r#type,
            placeholder: placeholder,
            required: required,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Checkbox(checked: bool, onchange: EventHandler<bool>, children: Element) -> Element {
    rsx! {
        label {
            class: "checkbox",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            {children}
        }
    }
}
