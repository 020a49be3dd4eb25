//! Data models for the application.

mod credentials;
mod travel_plan;

pub use credentials::{Credentials, LoginResponse};
pub use travel_plan::{NewTravelPlan, TravelPlan};
