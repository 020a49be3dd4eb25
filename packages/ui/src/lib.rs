//! This crate contains all shared UI for the workspace.

pub mod components;
pub mod state;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_api, make_store};

pub mod views;

mod auth;
pub use auth::{use_session, AuthProvider, LogoutButton};

pub mod plan_grid;
pub use plan_grid::PlanGrid;

mod preview_frame;
pub use preview_frame::PreviewFrame;

mod create_plan_dialog;
pub use create_plan_dialog::CreatePlanDialog;
