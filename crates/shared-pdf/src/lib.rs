//! Shared PDF handling utilities
//!
//! This crate turns uploaded PDF bytes into page-marked plain text for the
//! rule checker. Extraction never fails outward: every error collapses into
//! an [`ExtractionOutcome::Failed`] that still carries (empty) text.

pub mod extract;

pub use extract::{
    extract_document_text, extract_pages, join_pages, page_marker, ExtractionOutcome, PdfError,
};
