mod login;
pub use login::LoginView;

mod travel;
pub use travel::TravelPlannerView;

mod travel_detail;
pub use travel_detail::TravelPlanDetailView;

#[cfg(test)]
mod tests {
    #[test]
    fn test_stylesheet_needs_no_bundled_images() {
        let css = include_str!("views.css");
        assert!(!css.contains("url("));
    }
}
