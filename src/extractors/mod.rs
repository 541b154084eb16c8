// src/extractors/mod.rs
pub mod entry_list;
pub mod patterns;

use std::path::Path;

use crate::models::MasterData;
use crate::pdf::PdfPages;
use crate::utils::error::PdfError;

// Re-export key extraction types for convenience
pub use entry_list::EntryListParser;

/// Reads an entry list PDF and returns its events and entries.
pub fn parse_pdf<P: AsRef<Path>>(path: P) -> Result<MasterData, PdfError> {
    let pages = PdfPages::open(path)?;
    let data = EntryListParser::parse_pages(pages.page_texts());
    tracing::info!(
        "Parsed {} pages: {} events, {} entries",
        pages.page_count(),
        data.events.len(),
        data.entries.len()
    );
    Ok(data)
}
