//! Desktop application entry point.

use pdf_viewer::app::App;

fn main() {
    dioxus::launch(App);
}
