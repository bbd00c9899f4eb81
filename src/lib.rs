//! PDF Merger Library
//!
//! Collects document descriptions into a merge queue and writes a plain-text
//! summary of the queue. This library provides functionality to:
//! - Model plain and PDF documents with their display formats
//! - Queue documents and list the queue
//! - Write a merge summary with the total page count
//! - Stamp and parse creation dates
//!
//! No PDF content is read or produced; the output file is text.
//!
//! # Example
//!
//! ```no_run
//! use pdf_merger::pdf::{PdfDocument, PdfMerger};
//!
//! let mut merger = PdfMerger::new("merged.pdf");
//! merger.add_document(&PdfDocument::new("1. intro.pdf", 4, "Alice"));
//! merger.add_document(&PdfDocument::new("2. advanced.pdf", 7, "Bob"));
//!
//! let summary = merger.try_merge().expect("Failed to merge");
//! assert_eq!(summary.total_pages, 11);
//! ```

pub mod error;
pub mod pdf;
pub mod date;

// Re-export commonly used items
pub use error::{Error, Result};
