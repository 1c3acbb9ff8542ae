//! State definitions for the document viewer.

use std::fmt;

use common::loaded_document::LoadedDocument;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewerState {
    pub document: Option<LoadedDocument>,
    /// Message from the last failed open, shown above the placeholder.
    pub last_error: Option<String>,
}

impl ViewerState {
    pub fn open(&mut self, document: LoadedDocument) {
        self.document = Some(document);
        self.last_error = None;
    }

    pub fn close(&mut self) {
        self.document = None;
        self.last_error = None;
    }

    pub fn fail(&mut self, message: impl fmt::Display) {
        self.last_error = Some(message.to_string());
    }

    /// Drops a stale failure message, e.g. after the user cancels a retry.
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    pub fn window_title(&self, base: &str) -> String {
        match &self.document {
            Some(document) => format!("{} - {}", document.file_name, base),
            None => base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(path: &str) -> LoadedDocument {
        LoadedDocument::from_path(path).unwrap()
    }

    #[test]
    fn starts_on_placeholder() {
        let state = ViewerState::default();
        assert!(state.document.is_none());
        assert_eq!(state.window_title("PDF Viewer"), "PDF Viewer");
    }

    #[test]
    fn open_replaces_placeholder_and_clears_error() {
        let mut state = ViewerState::default();
        state.fail("not a PDF file: /tmp/a.txt");
        state.open(doc("/tmp/report.pdf"));
        assert!(state.document.is_some());
        assert_eq!(state.last_error, None);
        assert_eq!(state.window_title("PDF Viewer"), "report.pdf - PDF Viewer");
    }

    #[test]
    fn failure_keeps_current_document() {
        let mut state = ViewerState::default();
        state.open(doc("/tmp/report.pdf"));
        state.fail("dialog crashed");
        assert_eq!(state.document, Some(doc("/tmp/report.pdf")));
        assert_eq!(state.last_error.as_deref(), Some("dialog crashed"));
    }

    #[test]
    fn dismissing_clears_only_the_error() {
        let mut state = ViewerState::default();
        state.open(doc("/tmp/report.pdf"));
        state.fail("dialog crashed");
        state.dismiss_error();
        assert_eq!(state.last_error, None);
        assert_eq!(state.document, Some(doc("/tmp/report.pdf")));
    }

    #[test]
    fn close_returns_to_placeholder() {
        let mut state = ViewerState::default();
        state.open(doc("/tmp/report.pdf"));
        state.close();
        assert_eq!(state, ViewerState::default());
    }

    #[test]
    fn round_trips_through_json() {
        let mut state = ViewerState::default();
        state.open(doc("/tmp/report.pdf"));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<ViewerState>(&json).unwrap(), state);
    }
}
