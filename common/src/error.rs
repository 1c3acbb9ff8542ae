use thiserror::Error;

/// Errors raised by the viewer model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    /// The placeholder was activated but nobody asked to be told.
    #[error("no open handler is attached to the placeholder")]
    MissingOpenHandler,

    #[error("not a PDF file: {0}")]
    NotAPdf(String),

    #[error("path has no file name: {0}")]
    NoFileName(String),
}
