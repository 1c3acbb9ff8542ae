use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// A PDF the user picked, identified by its location on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub file_name: String,
}

impl LoadedDocument {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let Some(file_name) = path.file_name() else {
            return Err(ViewerError::NoFileName(display));
        };
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Err(ViewerError::NotAPdf(display));
        }

        Ok(Self {
            path: path.to_path_buf(),
            file_name: file_name.to_string_lossy().into_owned(),
        })
    }

    /// Directory holding the document, if the path has one.
    pub fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|dir| !dir.as_os_str().is_empty())
    }
}
