//! Application root: document head and router.

use dioxus::prelude::*;

use crate::{components::error_boundary::GlobalErrorBoundary, routes::Route};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const ROBOTO: &str = "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&display=swap";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: ROBOTO }
        document::Stylesheet { href: MAIN_CSS }
        Title { "Cellar" }

        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
