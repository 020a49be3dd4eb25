//! Authentication context and hooks for the UI.

use api::Session;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session for the lifetime of the app.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(Session::new);

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out the current user. Pages watching the session react to the change.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.write().logout();
        tracing::info!("logged out");
    };

    rsx! {
        Button {
            variant: ButtonVariant::Soft,
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
