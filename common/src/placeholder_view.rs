//! The "no document loaded" view and its open affordance.

use std::fmt;
use std::rc::Rc;

use crate::error::ViewerError;
use crate::placeholder_layout::{placeholder_layout, ActionControl, Label, LayoutItem};

/// Zero-argument callback run when the user asks to open a document.
pub type OpenCallback = Rc<dyn Fn()>;

/// Placeholder shown while no document is loaded.
///
/// Holds its own copy of the layout and a shared handle to the caller's
/// [`OpenCallback`]. The callback is only ever run from [`activate`].
///
/// [`activate`]: PlaceholderView::activate
#[derive(Clone)]
pub struct PlaceholderView {
    layout: Vec<LayoutItem>,
    on_open: Option<OpenCallback>,
}

impl PlaceholderView {
    pub fn new(on_open: impl Fn() + 'static) -> Self {
        Self::from_callback(Some(Rc::new(on_open)))
    }

    /// Builds the view even when no callback is given. The fault surfaces on
    /// the first activation instead.
    pub fn from_callback(on_open: Option<OpenCallback>) -> Self {
        Self {
            layout: placeholder_layout(),
            on_open,
        }
    }

    pub fn layout(&self) -> &[LayoutItem] {
        &self.layout
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.layout.iter().filter_map(LayoutItem::as_label)
    }

    pub fn action_controls(&self) -> impl Iterator<Item = &ActionControl> {
        self.layout.iter().filter_map(LayoutItem::as_action)
    }

    pub fn has_open_handler(&self) -> bool {
        self.on_open.is_some()
    }

    /// Runs the open callback once, synchronously.
    pub fn activate(&self) -> Result<(), ViewerError> {
        let Some(on_open) = &self.on_open else {
            return Err(ViewerError::MissingOpenHandler);
        };
        on_open();
        Ok(())
    }
}

impl fmt::Debug for PlaceholderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceholderView")
            .field("layout", &self.layout)
            .field("has_open_handler", &self.has_open_handler())
            .finish()
    }
}
