mod login;
pub use login::Login;

mod travel;
pub use travel::{TravelPlanDetail, TravelPlanner};
