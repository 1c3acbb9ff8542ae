//! Native file picker for choosing a PDF.

use std::path::PathBuf;

use anyhow::Context;
use common::loaded_document::LoadedDocument;

/// Shows the platform open dialog. `Ok(None)` means the user cancelled.
pub async fn pick_pdf(start_dir: Option<PathBuf>) -> anyhow::Result<Option<LoadedDocument>> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Open PDF")
        .add_filter("PDF documents", &["pdf", "PDF"]);
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }

    let Some(handle) = dialog.pick_file().await else {
        return Ok(None);
    };
    let document = LoadedDocument::from_path(handle.path())
        .with_context(|| format!("Cannot open {}", handle.file_name()))?;
    Ok(Some(document))
}
