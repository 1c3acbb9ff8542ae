//! Full-page view of an opened document.

use common::loaded_document::LoadedDocument;
use dioxus::prelude::*;

use crate::components::document_view_components::doc_title_bar::DocTitleBar;

#[component]
pub fn LoadedDocumentView(document: ReadSignal<LoadedDocument>, on_close: EventHandler<()>) -> Element {
    let path = document.read().path.display().to_string();
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                height: 100%;
                width: 100%;
                overflow: hidden;
            ",
            DocTitleBar { document, on_close }
            div {
                style: "
                    flex-grow: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 16px;
                    color: rgba(0, 0, 0, 0.6);
                ",
                "{path}"
            }
        }
    }
}
