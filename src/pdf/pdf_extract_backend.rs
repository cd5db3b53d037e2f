//! Primary provider, backed by the `pdf-extract` crate.
//!
//! `pdf-extract` can panic on malformed input instead of returning an error,
//! so the parse runs inside [`std::panic::catch_unwind`].

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::debug;

use super::{read_pdf_bytes, PdfDocument, ReadError};

/// A document whose pages were all decoded when it was opened.
pub struct PdfExtractDocument {
    pages: Vec<String>,
}

pub fn open(path: &Path) -> Result<PdfExtractDocument, ReadError> {
    let bytes = read_pdf_bytes(path)?;
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    }));
    let pages = match result {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(ReadError::Parse(e.to_string())),
        Err(_) => return Err(ReadError::Panicked("pdf-extract")),
    };
    debug!(path = %path.display(), pages = pages.len(), "pdf-extract decoded document");
    Ok(PdfExtractDocument { pages })
}

impl PdfDocument for PdfExtractDocument {
    fn page_count(&self) -> u32 {
        u32::try_from(self.pages.len()).unwrap_or(u32::MAX)
    }

    fn page_text(&self, number: u32) -> Result<String, ReadError> {
        number
            .checked_sub(1)
            .and_then(|index| self.pages.get(index as usize))
            .cloned()
            .ok_or_else(|| ReadError::Page {
                number,
                message: format!("out of range (document has {} pages)", self.pages.len()),
            })
    }
}
