//! PDF text extraction
//!
//! Converts raw document bytes into a single string where every page is
//! preceded by a `--- PAGE <n> ---` marker line and pages are separated by a
//! blank line.
//!
//! # Example
//! ```no_run
//! use shared_pdf::extract_document_text;
//!
//! fn print_text(pdf_bytes: &[u8]) {
//!     let outcome = extract_document_text(pdf_bytes);
//!     if outcome.is_failure() {
//!         eprintln!("falling back to empty text");
//!     }
//!     println!("{}", outcome.text());
//! }
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while reading a PDF
#[derive(Error, Debug)]
pub enum PdfError {
    #[error("PDF extraction failed: {0}")]
    Parse(String),

    #[error("PDF parser panicked: {0}")]
    Panicked(String),
}

/// Result of turning document bytes into text
///
/// `Failed` is not an error for callers: its text is empty and evaluation
/// proceeds against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Text was extracted (possibly empty, e.g. for scanned pages)
    Extracted { text: String, page_count: usize },

    /// The document could not be read
    Failed { reason: String },
}

impl ExtractionOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        ExtractionOutcome::Failed {
            reason: reason.into(),
        }
    }

    /// Page-marked document text, empty on failure
    pub fn text(&self) -> &str {
        match self {
            ExtractionOutcome::Extracted { text, .. } => text,
            ExtractionOutcome::Failed { .. } => "",
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ExtractionOutcome::Extracted { text, .. } => text,
            ExtractionOutcome::Failed { .. } => String::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ExtractionOutcome::Failed { .. })
    }

    pub fn page_count(&self) -> usize {
        match self {
            ExtractionOutcome::Extracted { page_count, .. } => *page_count,
            ExtractionOutcome::Failed { .. } => 0,
        }
    }

    /// True if any page produced non-whitespace text
    pub fn has_text(&self) -> bool {
        self.text()
            .lines()
            .any(|line| !is_page_marker(line) && !line.trim().is_empty())
    }
}

/// Marker line placed before the text of page `page_number` (1-based)
pub fn page_marker(page_number: usize) -> String {
    format!("--- PAGE {} ---", page_number)
}

fn is_page_marker(line: &str) -> bool {
    line.strip_prefix("--- PAGE ")
        .and_then(|rest| rest.strip_suffix(" ---"))
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// Join per-page texts into the page-marked document text
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .enumerate()
        .map(|(idx, page)| format!("{}\n{}", page_marker(idx + 1), page.as_ref()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Extract the text of every page, in document order
///
/// Panics inside the parser are caught and reported as [`PdfError::Panicked`].
pub fn extract_pages(pdf_bytes: &[u8]) -> Result<Vec<String>, PdfError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(PdfError::Parse(e.to_string())),
        Err(payload) => Err(PdfError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Extract page-marked text from PDF bytes
///
/// Never fails: unreadable input yields [`ExtractionOutcome::Failed`] and a
/// warning in the log.
pub fn extract_document_text(pdf_bytes: &[u8]) -> ExtractionOutcome {
    match extract_pages(pdf_bytes) {
        Ok(pages) => {
            debug!(
                "Extracted {} pages from {} bytes",
                pages.len(),
                pdf_bytes.len()
            );
            ExtractionOutcome::Extracted {
                text: join_pages(&pages),
                page_count: pages.len(),
            }
        }
        Err(e) => {
            warn!("PDF extraction error: {}", e);
            ExtractionOutcome::failed(e.to_string())
        }
    }
}
