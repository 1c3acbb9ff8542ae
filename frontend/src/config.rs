//! Startup configuration read from the environment.

use std::path::PathBuf;

use dioxus::logger::tracing;

pub const DEFAULT_WINDOW_TITLE: &str = "PDF Viewer";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Directory the open dialog starts in.
    pub start_dir: Option<PathBuf>,
    pub window_title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            start_dir: None,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let start_dir = lookup("PDF_VIEWER_START_DIR").map(PathBuf::from).and_then(|dir| {
            if dir.is_dir() {
                Some(dir)
            } else {
                tracing::warn!("PDF_VIEWER_START_DIR is not a directory, ignoring: {}", dir.display());
                None
            }
        });
        let window_title = lookup("PDF_VIEWER_TITLE")
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(DEFAULT_WINDOW_TITLE.to_string());

        Self { start_dir, window_title }
    }
}
