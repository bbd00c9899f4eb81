//! Document model and merge queue

pub mod document;
pub mod merge;

// Re-export commonly used items
pub use document::{Document, DocumentSpec, PdfDocument};
pub use merge::{MergeSummary, PdfMerger, DEFAULT_OUTPUT};
