//! Export of the rendered drawing as a standalone SVG file.

use std::io::Write;
use std::path::Path;

use crate::document::LogoDocument;

/// Fixed file name of the export artifact.
pub const FILE_NAME: &str = "logo.svg";

/// MIME type of the export artifact.
pub const MIME_TYPE: &str = "image/svg+xml";

/// Errors that can occur while saving an export artifact.
///
/// The only failure mode inside the composer itself (exporting with no
/// rendered preview) is a silent no-op, not an error; this type covers the
/// file system leg only.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing the artifact to disk failed.
    #[error("failed to write export artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// A standalone SVG export artifact.
///
/// The contents are the exact serialization of the rendered drawing at the
/// moment of export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgExport {
    contents: String,
}

impl SvgExport {
    /// Captures an export artifact from a rendered drawing.
    pub fn from_document(document: &LogoDocument) -> Self {
        Self {
            contents: document.to_svg(),
        }
    }

    /// The fixed download file name.
    pub fn file_name(&self) -> &'static str {
        FILE_NAME
    }

    /// The artifact's MIME type.
    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }

    /// The SVG markup.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Consumes the artifact, returning the markup.
    pub fn into_contents(self) -> String {
        self.contents
    }

    /// Writes the artifact to the given path.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let mut file = std::fs::File::create(path.as_ref())?;
        file.write_all(self.contents.as_bytes())?;
        log::debug!("wrote export artifact to {}", path.as_ref().display());
        Ok(())
    }
}
