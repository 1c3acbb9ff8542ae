//! Toolkit independent model shared by the viewer frontend.

extern crate serde;


pub mod error;
pub mod loaded_document;
pub mod placeholder_layout;
pub mod placeholder_view;
