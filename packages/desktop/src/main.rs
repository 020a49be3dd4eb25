use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;
use views::{Login, TravelPlanDetail, TravelPlanner};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/travel")]
    TravelPlanner {},
    #[route("/travel/:id")]
    TravelPlanDetail { id: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialise logger");
    info!("starting travel planner (desktop)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::AuthProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    // Redirect based on auth state
    if session().is_authenticated() {
        nav.replace(Route::TravelPlanner {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}
