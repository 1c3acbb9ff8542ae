pub mod document_view_components;
pub mod error_boundary;
