//! Placeholder view shown while no PDF is loaded.

use std::rc::Rc;

use common::placeholder_layout::{ActionControl, Label, LayoutItem};
use common::placeholder_view::{OpenCallback, PlaceholderView};
use dioxus::logger::tracing;
use dioxus::prelude::*;

/// Centered "No PDF Loaded" stack with an "Open PDF" button.
///
/// `on_open` runs once per click. Without it the button still renders and
/// every click is reported as an error.
#[component]
pub fn OpenPdfPlaceholder(on_open: Option<EventHandler<()>>) -> Element {
    let on_open = on_open.map(|handler| Rc::new(move || handler.call(())) as OpenCallback);
    let view = PlaceholderView::from_callback(on_open);

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                height: 100%;
                width: 100%;
                box-sizing: border-box;
                padding: 0 24px;
                text-align: center;
            ",
            {view.layout().iter().enumerate().map(|(index, item)| render_layout_item(index, item, &view))}
        }
    }
}

fn render_layout_item(index: usize, item: &LayoutItem, view: &PlaceholderView) -> Element {
    match item {
        LayoutItem::Glue => rsx! {
            div { key: "{index}", style: "flex-grow: 1;" }
        },
        LayoutItem::Gap(height) => rsx! {
            div { key: "{index}", style: "flex-shrink: 0; height: {height}px;" }
        },
        LayoutItem::Label(label) => render_label(index, label),
        LayoutItem::Action(action) => render_action(index, action, view.clone()),
    }
}

/// Click handler body: runs the open callback or logs why it could not.
fn handle_open_click(view: &PlaceholderView, caption: &str) -> bool {
    match view.activate() {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("{caption} click ignored: {e}");
            false
        }
    }
}

fn render_label(index: usize, label: &Label) -> Element {
    let text = label.text;
    let style = format!(
        "flex-shrink: 0; font-size: {}px; font-weight: {}; color: {};",
        label.style.size,
        label.style.weight.css_value(),
        label.style.color.to_css(),
    );
    rsx! {
        div { key: "{index}", style: "{style}", "{text}" }
    }
}

fn render_action(index: usize, action: &ActionControl, view: PlaceholderView) -> Element {
    let caption = action.caption;
    rsx! {
        button {
            key: "{index}",
            style: "
                flex-shrink: 0;
                padding: 8px 24px;
                cursor: pointer;
                border: 1px solid rgba(0, 0, 0, 0.3);
                border-radius: 8px;
                background: white;
                color: black;
                font-size: 14px;
                font-weight: 700;
            ",
            class: "pdf-viewer-hover-shadow-background",
            onclick: move |_| {
                handle_open_click(&view, caption);
            },
            "{caption}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_core::VirtualDom;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn with_handler() -> Element {
        rsx! {
            OpenPdfPlaceholder { on_open: move |_| {} }
        }
    }

    fn without_handler() -> Element {
        rsx! {
            OpenPdfPlaceholder {}
        }
    }

    #[test]
    fn renders_a_single_open_pdf_button() {
        let html = render(with_handler);
        assert_eq!(html.matches("<button").count(), 1);
        assert_eq!(html.matches("Open PDF").count(), 1);
    }

    #[test]
    fn renders_static_elements_in_order() {
        let html = render(with_handler);
        let positions: Vec<usize> = [
            "📄",
            "No PDF Loaded",
            "Drag and drop a PDF here or click below to open a file",
            "Enjoy a secure, reliable, and completely free experience.",
            "Open PDF",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
    }

    #[test]
    fn renders_glue_and_fixed_gaps() {
        let html = render(with_handler);
        assert_eq!(html.matches("flex-grow: 1;").count(), 2);
        for gap in ["height: 20px", "height: 10px", "height: 30px", "height: 40px"] {
            assert!(html.contains(gap), "missing {gap}");
        }
    }

    #[test]
    fn missing_handler_still_renders_the_button() {
        let html = render(without_handler);
        assert_eq!(html.matches("Open PDF").count(), 1);
    }

    #[test]
    fn click_handler_forwards_every_click() {
        let clicks = Rc::new(std::cell::Cell::new(0));
        let seen = clicks.clone();
        let view = PlaceholderView::new(move || seen.set(seen.get() + 1));
        assert!(handle_open_click(&view, "Open PDF"));
        assert!(handle_open_click(&view, "Open PDF"));
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn click_handler_without_callback_reports_failure() {
        let view = PlaceholderView::from_callback(None);
        assert!(!handle_open_click(&view, "Open PDF"));
        assert!(!handle_open_click(&view, "Open PDF"));
    }

    #[test]
    fn highlight_uses_accent_color() {
        let html = render(with_handler);
        assert!(html.contains("color: rgba(255, 237, 107, 1)"));
    }
}
