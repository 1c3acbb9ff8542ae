use dioxus::prelude::*;

use crate::components::document_view_components::DocumentViewRoot;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::config::ViewerConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(ViewerConfig::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            DocumentViewRoot {}
        }
    }
}
