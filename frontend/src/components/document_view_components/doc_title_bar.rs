//! Title bar for the open document.

use dioxus::prelude::*;

use common::loaded_document::LoadedDocument;
use dioxus_free_icons::{Icon, icons::{md_editor_icons::MdInsertDriveFile, md_navigation_icons::MdClose}};

#[component]
pub fn DocTitleBar(document: ReadSignal<LoadedDocument>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
                align-items: center;
                justify-content: space-between;
                height: 54px;
                width: 100%;
                box-sizing: border-box;
                background-color:#F8FCFF;
                flex-shrink: 0;
                flex-grow: 0;
                border: 1px solid rgba(0, 0, 0, 0.3);
            ",
            // FOLDER AND FILENAME
            FolderAndFilenameSection { document: document() }
            // SPACER
            div {
                style:"flex-grow: 1;"
            }
            // CLOSE
            button {
                style: "
                    width: 40px;
                    height: 40px;
                    cursor: pointer;
                    border: 1px solid #000;
                    border-radius: 8px;
                    background: white;
                    color: black;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-right: 8px;
                ",
                class: "pdf-viewer-hover-shadow-background",
                title: "Close document",
                onclick: move |_| on_close.call(()),
                Icon {
                    icon: MdClose,
                    style: "width: 24px; height: 24px;"
                }
            }
        }
    }
}

#[component]
fn FolderAndFilenameSection(document: ReadSignal<LoadedDocument>) -> Element {
    let folder = document
        .read()
        .parent_dir()
        .map(|dir| dir.display().to_string());
    let file_name = document.read().file_name.clone();
    rsx! {
        div {
            style: "
                flex-grow: 0;
                flex-shrink: 0;
                max-width: calc(100% - 120px);
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding-left: 12px;
                font-size: 20px;
                font-weight: 400;
                overflow: hidden;
                white-space: nowrap;
            ",
            if let Some(folder) = folder {
                div {
                    style: "color: rgba(0, 0, 0, 0.8); font-style: italic; overflow: hidden; text-overflow: ellipsis;",
                    "{folder}"
                }
                div { "/" }
            }
            Icon {
                icon: MdInsertDriveFile,
                style: "width: 24px; height: 24px; flex-shrink: 0;"
            }
            div {
                style: "font-weight: 500;",
                "{file_name}"
            }
        }
    }
}
