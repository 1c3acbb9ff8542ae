//! Document area: the placeholder until a PDF is open, then the document.

pub mod doc_title_bar;
pub mod loaded_document_view;
pub mod open_pdf_placeholder;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::file_dialog;
use crate::components::document_view_components::loaded_document_view::LoadedDocumentView;
use crate::components::document_view_components::open_pdf_placeholder::OpenPdfPlaceholder;
use crate::config::ViewerConfig;
use crate::data_definitions::viewer_state::ViewerState;

#[component]
pub fn DocumentViewRoot() -> Element {
    let viewer_state = use_signal(ViewerState::default);
    rsx! {
        DocumentViewBody { viewer_state }
    }
}

/// Placeholder or open document, driven by the given state.
#[component]
pub fn DocumentViewBody(viewer_state: Signal<ViewerState>) -> Element {
    let config = use_context::<ViewerConfig>();
    let mut viewer_state = viewer_state;

    let state = viewer_state.read().clone();
    let title = state.window_title(&config.window_title);

    // The dialog runs on the async runtime so the click returns immediately.
    let open_pdf = move |_: ()| {
        let start_dir = config.start_dir.clone();
        tracing::info!("Open PDF requested");
        spawn(async move {
            match file_dialog::pick_pdf(start_dir).await {
                Ok(Some(loaded)) => {
                    tracing::info!("Opened {}", loaded.path.display());
                    viewer_state.write().open(loaded);
                }
                Ok(None) => {
                    tracing::info!("Open PDF dialog dismissed");
                    viewer_state.write().dismiss_error();
                }
                Err(e) => {
                    tracing::error!("Failed to open PDF: {e:#}");
                    viewer_state.write().fail(format!("{e:#}"));
                }
            }
        });
    };

    match state.document {
        Some(loaded) => rsx! {
            document::Title { "{title}" }
            LoadedDocumentView {
                document: loaded,
                on_close: move |_| {
                    tracing::info!("Closing document");
                    viewer_state.write().close();
                },
            }
        },
        None => rsx! {
            document::Title { "{title}" }
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    width: 100%;
                ",
                if let Some(message) = state.last_error {
                    OpenErrorBanner { message }
                }
                div {
                    style: "flex-grow: 1; min-height: 0;",
                    OpenPdfPlaceholder { on_open: open_pdf }
                }
            }
        },
    }
}

#[component]
fn OpenErrorBanner(message: ReadSignal<String>) -> Element {
    rsx! {
        div {
            style: "
                flex-shrink: 0;
                color: darkred;
                background: #FFF0F0;
                border: 1px solid red;
                border-radius: 5px;
                padding: 10px;
                margin: 15px;
                font-size: 14px;
            ",
            "{message}"
        }
    }
}
