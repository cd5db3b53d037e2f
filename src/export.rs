//! Page-annotated text export: renders every page of the input document into
//! one string and writes it out, folding every failure into a single status.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::pdf::{Pages, PdfReader};

/// Input document, relative to the working directory.
pub const INPUT_FILE: &str = "FINAL_PROJECT_ASSIGNMENT.pdf";

/// Output text file, relative to the working directory.
pub const OUTPUT_FILE: &str = "pdf_content.txt";

/// Token printed when no PDF provider is available.
pub const MISSING_LIB: &str = "MISSING_LIB";

/// Outcome of one run, printed verbatim as the single stdout line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    MissingLib,
    Saved(PathBuf),
    Failed(String),
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::MissingLib => f.write_str(MISSING_LIB),
            RunStatus::Saved(_) => write!(f, "PDF content saved to {}", OUTPUT_FILE),
            RunStatus::Failed(message) => write!(f, "Error reading PDF: {}", message),
        }
    }
}

/// Appends one page block: a `--- Page N ---` header, the text, and a newline.
pub fn push_page_block(out: &mut String, number: u32, text: &str) {
    out.push_str(&format!("\n--- Page {} ---\n", number));
    out.push_str(text);
    out.push('\n');
}

/// Opens `input` with `reader` and renders every page in order.
/// The first failing page aborts the whole render.
pub fn render_document(reader: &dyn PdfReader, input: &Path) -> Result<String> {
    let document = reader
        .open(input)
        .with_context(|| format!("failed to open {}", input.display()))?;

    let mut text = String::new();
    for page in Pages::new(&*document) {
        let page_text = page
            .extract_text()
            .with_context(|| format!("failed to extract text from page {}", page.number()))?;
        debug!(page = page.number(), chars = page_text.len(), "extracted page");
        push_page_block(&mut text, page.number(), &page_text);
    }
    Ok(text)
}

/// Renders `input` and writes the result to `output`, replacing any prior content.
/// Nothing is written unless every page rendered.
pub fn export(reader: &dyn PdfReader, input: &Path, output: &Path) -> Result<()> {
    let text = render_document(reader, input)?;
    fs::write(output, text.as_bytes())
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}

/// Runs the export for the fixed file names inside `dir`.
/// This is the only error boundary: every failure becomes [`RunStatus::Failed`].
pub fn run(reader: Option<&dyn PdfReader>, dir: &Path) -> RunStatus {
    let Some(reader) = reader else {
        warn!("no PDF provider is available in this build");
        return RunStatus::MissingLib;
    };

    let input = dir.join(INPUT_FILE);
    let output = dir.join(OUTPUT_FILE);
    info!(provider = reader.name(), input = %input.display(), "exporting PDF text");

    match export(reader, &input, &output) {
        Ok(()) => {
            info!(output = %output.display(), "export finished");
            RunStatus::Saved(output)
        }
        Err(e) => {
            warn!(provider = reader.name(), "export failed: {:#}", e);
            RunStatus::Failed(format!("{:#}", e))
        }
    }
}
