// src/pdf/mod.rs
use std::path::Path;

use crate::utils::error::PdfError;

/// Plain text of every page of an entry list PDF, in document order.
///
/// Text comes from `pdf-extract`, which decodes CID fonts through their
/// ToUnicode maps and starts a new line whenever the text position moves
/// down and back to the left, so each printed row ends up on its own line.
pub struct PdfPages {
    texts: Vec<String>,
}

impl PdfPages {
    /// Reads and decodes the whole document. The file is closed before this returns.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PdfError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| PdfError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // pdf-extract stops at the first page it cannot render; later pages are lost.
        let texts = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
            PdfError::Extract {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        tracing::info!("Opened {} ({} pages)", path.display(), texts.len());
        Ok(Self { texts })
    }

    pub fn page_count(&self) -> usize {
        self.texts.len()
    }

    pub fn page_texts(&self) -> &[String] {
        &self.texts
    }
}
