// Legacy provider, backed by `lopdf`. Pages are decoded one at a time.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::{read_pdf_bytes, PdfDocument, ReadError};

pub struct LopdfDocument {
    document: Document,
    page_numbers: Vec<u32>,
}

pub fn open(path: &Path) -> Result<LopdfDocument, ReadError> {
    let bytes = read_pdf_bytes(path)?;
    let document = Document::load_mem(&bytes).map_err(|e| ReadError::Parse(e.to_string()))?;
    // get_pages is keyed by page number, so the keys come back in document order
    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    debug!(path = %path.display(), pages = page_numbers.len(), "lopdf loaded document");
    Ok(LopdfDocument {
        document,
        page_numbers,
    })
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> u32 {
        u32::try_from(self.page_numbers.len()).unwrap_or(u32::MAX)
    }

    fn page_text(&self, number: u32) -> Result<String, ReadError> {
        let page = number
            .checked_sub(1)
            .and_then(|index| self.page_numbers.get(index as usize))
            .copied()
            .ok_or_else(|| ReadError::Page {
                number,
                message: format!(
                    "out of range (document has {} pages)",
                    self.page_numbers.len()
                ),
            })?;
        self.document
            .extract_text(&[page])
            .map_err(|e| ReadError::Page {
                number,
                message: e.to_string(),
            })
    }
}
