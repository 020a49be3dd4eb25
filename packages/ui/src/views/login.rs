//! Sign-in page with email/password and "remember me".

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Callout, Checkbox, Input, Label};
use crate::state::{submit_login, LoginForm};
use crate::{make_api, make_store, use_session};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared login view.
///
/// Restores a remembered email on mount, submits through the session facade and
/// shows "Invalid credentials." on any failure. Platform packages provide the
/// navigation callback.
#[component]
pub fn LoginView(
    /// Called once a session token exists, including when one already did on mount.
    on_logged_in: EventHandler<()>,
) -> Element {
    let session = use_session();
    let api = use_hook(make_api);
    let mut form = use_signal(|| LoginForm::restore(&make_store()));

    use_effect(move || {
        if session().is_authenticated() {
            on_logged_in.call(());
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            submit_login(form, &make_store(), &api, session).await;
        });
    };

    let state = form();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "login-page",

            div {
                class: "login-card",

                h1 { class: "login-title", "Sign In" }

                if state.error {
                    Callout { "Invalid credentials." }
                }

                form {
                    class: "login-form",
                    onsubmit: handle_login,

                    div {
                        class: "form-field",
                        Label { html_for: "login-email", "Email" }
                        Input {
                            id: "login-email",
                            name: "email",
                            r#type: "email",
                            placeholder: "Enter your email address...",
                            required: true,
                            value: state.email.clone(),
                            oninput: move |evt: FormEvent| form.write().set_email(evt.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            name: "password",
                            r#type: "password",
                            placeholder: "Enter your password...",
                            required: true,
                            value: state.password.clone(),
                            oninput: move |evt: FormEvent| form.write().set_password(evt.value()),
                        }
                    }

                    div {
                        class: "login-options",
                        Checkbox {
                            checked: state.remember_me,
                            onchange: move |checked: bool| form.write().set_remember_me(checked),
                            "Remember me"
                        }
                        a { class: "link", href: "/forgot-password", "Forgot password?" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "login-submit",
                        r#type: "submit",
                        disabled: state.submitting,
                        "Continue"
                    }
                }

                p {
                    class: "login-footer",
                    "Don't have an account? "
                    a { class: "link", href: "/signup", "Create an account" }
                }
            }

            a { class: "back-link", href: "/portal", "Back to portal" }
        }
    }
}
