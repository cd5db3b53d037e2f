// PDF reading capability: the traits every provider implements, lazy page
// iteration, and the one-time provider selection.

use std::fmt;
use std::path::Path;

use thiserror::Error;

#[cfg(feature = "provider-lopdf")]
pub mod lopdf_backend;
#[cfg(feature = "provider-pdf-extract")]
pub mod pdf_extract_backend;

#[cfg(test)]
pub(crate) mod fixtures;

/// How far into the file the `%PDF-` marker may appear.
const HEADER_SEARCH_LIMIT: usize = 1024;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("not a PDF file (no %PDF- header found)")]
    NotPdf,

    #[error("{0}")]
    Parse(String),

    #[error("page {number}: {message}")]
    Page { number: u32, message: String },

    #[error("{0} panicked while parsing the document")]
    Panicked(&'static str),
}

/// An opened document. Page numbers are 1-based.
pub trait PdfDocument {
    fn page_count(&self) -> u32;

    fn page_text(&self, number: u32) -> Result<String, ReadError>;
}

/// A PDF parsing library able to open a document by path.
pub trait PdfReader {
    fn name(&self) -> &'static str;

    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, ReadError>;
}

/// One page of an opened document. Text is extracted on demand.
pub struct Page<'a> {
    document: &'a dyn PdfDocument,
    number: u32,
}

impl Page<'_> {
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn extract_text(&self) -> Result<String, ReadError> {
        self.document.page_text(self.number)
    }
}

/// Lazy iterator over the pages of a document in document order.
/// Calling [`Pages::new`] again restarts from the first page.
pub struct Pages<'a> {
    document: &'a dyn PdfDocument,
    next: u32,
    count: u32,
}

impl<'a> Pages<'a> {
    pub fn new(document: &'a dyn PdfDocument) -> Self {
        Self {
            document,
            next: 1,
            count: document.page_count(),
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.count {
            return None;
        }
        let page = Page {
            document: self.document,
            number: self.next,
        };
        self.next += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count as usize + 1).saturating_sub(self.next as usize);
        (remaining, Some(remaining))
    }
}

/// The PDF libraries this build can use, in order of preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    #[cfg(feature = "provider-pdf-extract")]
    PdfExtract,
    #[cfg(feature = "provider-lopdf")]
    Lopdf,
}

const PROVIDERS: &[Provider] = &[
    #[cfg(feature = "provider-pdf-extract")]
    Provider::PdfExtract,
    #[cfg(feature = "provider-lopdf")]
    Provider::Lopdf,
];

impl Provider {
    /// Picks the preferred available provider, `None` when the build has none.
    pub fn detect() -> Option<Self> {
        PROVIDERS.first().copied()
    }

    /// Every provider compiled into this build, preferred first.
    pub fn available() -> &'static [Provider] {
        PROVIDERS
    }
}

impl PdfReader for Provider {
    fn name(&self) -> &'static str {
        match *self {
            #[cfg(feature = "provider-pdf-extract")]
            Provider::PdfExtract => "pdf-extract",
            #[cfg(feature = "provider-lopdf")]
            Provider::Lopdf => "lopdf",
        }
    }

    fn open(&self, path: &Path) -> Result<Box<dyn PdfDocument>, ReadError> {
        match *self {
            #[cfg(feature = "provider-pdf-extract")]
            Provider::PdfExtract => Ok(Box::new(pdf_extract_backend::open(path)?)),
            #[cfg(feature = "provider-lopdf")]
            Provider::Lopdf => Ok(Box::new(lopdf_backend::open(path)?)),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if the `%PDF-` marker appears near the start of `head`.
/// Some producers emit junk before the header, so the first kilobyte is searched.
pub fn has_pdf_header(head: &[u8]) -> bool {
    const MAGIC: &[u8] = b"%PDF-";
    let limit = HEADER_SEARCH_LIMIT.min(head.len());
    head[..limit].windows(MAGIC.len()).any(|w| w == MAGIC)
}

/// Reads the whole file and rejects anything without a PDF header.
#[cfg(any(feature = "provider-pdf-extract", feature = "provider-lopdf"))]
pub(crate) fn read_pdf_bytes(path: &Path) -> Result<Vec<u8>, ReadError> {
    let bytes = std::fs::read(path)?;
    if !has_pdf_header(&bytes) {
        return Err(ReadError::NotPdf);
    }
    Ok(bytes)
}
