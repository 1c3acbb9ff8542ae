//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                let error_txt = format!("{_err:#?}");
                rsx! {
                    div {
                        width: "100%",
                        height: "100%",
                        display: "flex",
                        flex_direction: "column",
                        align_items: "center",
                        justify_content: "center",

                        h1 {
                            style: "color:red; font-size: 34px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px;",
                            "Error",
                        }
                        p {
                            style: "color:darkred; font-size: 20px; margin: 5px;",
                            "Boundary: {boundary_name}"
                        }
                        pre {
                            style: "color:darkred; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                            "{error_txt}"
                        }
                        button {
                            style: "color:blue; font-size: 20px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px; cursor: pointer;",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}
