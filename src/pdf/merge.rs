//! Merge queue and plain-text merge summaries
//!
//! Merging does not touch any PDF content. The merger writes a short text
//! report naming every queued document and the total page count to a
//! `.pdf`-named output file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use crate::error::{Error, Result};
use crate::pdf::document::{PdfDocument, RULE};

/// Output file used when none is given
pub const DEFAULT_OUTPUT: &str = "Merged_Output.pdf";

/// Outcome of a successful merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Number of documents written to the summary
    pub files_merged: usize,
    /// Sum of their page counts
    pub total_pages: u64,
    /// Where the summary was written
    pub output_path: PathBuf,
}

/// Ordered queue of PDF documents waiting to be merged
///
/// The queue owns clones of the documents handed to it, so later changes to
/// the caller's values never reach queued entries.
///
/// # Example
///
/// ```no_run
/// use pdf_merger::pdf::{PdfDocument, PdfMerger};
///
/// let mut merger = PdfMerger::new("merged.pdf");
/// merger.add_document(&PdfDocument::new("a.pdf", 3, "Alice"));
/// merger.add_document(&PdfDocument::new("b.pdf", 5, "Bob"));
/// merger.merge_pdfs();
/// ```
#[derive(Debug, Clone)]
pub struct PdfMerger {
    queue: Vec<PdfDocument>,
    output_path: PathBuf,
}

impl Default for PdfMerger {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}

impl PdfMerger {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            queue: Vec::new(),
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Queued documents in insertion order
    pub fn documents(&self) -> &[PdfDocument] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn total_pages(&self) -> u64 {
        self.queue.iter().map(|pdf| u64::from(pdf.pages())).sum()
    }

    /// Queue a copy of `pdf` and confirm it on stdout
    pub fn add_document(&mut self, pdf: &PdfDocument) {
        self.queue.push(pdf.clone());
        debug!(name = pdf.name(), pages = pdf.pages(), queued = self.queue.len(), "queued document");
        println!("✅ Added: {} ({} pages)", pdf.name(), pdf.pages());
    }

    /// Queue listing as printed by [`PdfMerger::show_documents`]
    pub fn queue_listing(&self) -> String {
        let mut out = format!("\n📚 Documents in Merge Queue\n{RULE}\n");

        if self.queue.is_empty() {
            out.push_str("No PDF files added yet.\n");
            return out;
        }

        for (i, pdf) in self.queue.iter().enumerate() {
            out.push_str(&format!("{}. {} — {} pages\n", i + 1, pdf.name(), pdf.pages()));
        }
        out
    }

    /// Print the queue, 1-indexed, to stdout
    pub fn show_documents(&self) {
        print!("{}", self.queue_listing());
    }

    /// Text written to the output file for the current queue
    pub fn summary_text(&self) -> String {
        let mut out = format!("Merged PDF Document\n{RULE}\n");
        for pdf in &self.queue {
            out.push_str(&format!("Included: {} ({} pages)\n", pdf.name(), pdf.pages()));
        }
        out.push_str(&format!("{RULE}\nTotal Pages in Merged File: {}\n", self.total_pages()));
        out
    }

    /// Write the merge summary without reporting to the console
    ///
    /// Fails with [`Error::InsufficientDocuments`] before touching the file
    /// system when fewer than two documents are queued. The queue is left as
    /// it was.
    pub fn try_merge(&self) -> Result<MergeSummary> {
        if self.queue.len() < 2 {
            return Err(Error::InsufficientDocuments { queued: self.queue.len() });
        }

        let file = File::create(&self.output_path).map_err(|source| Error::OutputUnavailable {
            path: self.output_path.clone(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        writer.write_all(self.summary_text().as_bytes())?;
        writer.flush()?;

        let summary = MergeSummary {
            files_merged: self.queue.len(),
            total_pages: self.total_pages(),
            output_path: self.output_path.clone(),
        };
        debug!(
            path = %summary.output_path.display(),
            files = summary.files_merged,
            pages = summary.total_pages,
            "wrote merge summary"
        );
        Ok(summary)
    }

    /// Merge the queue into the output file and report the outcome
    ///
    /// Failures are reported here and not returned: a short queue prints a
    /// warning, an output file that cannot be created prints an error to
    /// stderr.
    pub fn merge_pdfs(&self) {
        match self.try_merge() {
            Ok(summary) => {
                println!(
                    "\n✅ Successfully merged {} files into '{}' ({} pages total)",
                    summary.files_merged,
                    summary.output_path.display(),
                    summary.total_pages
                );
            }
            Err(e @ Error::InsufficientDocuments { .. }) => {
                warn!("{}", e);
                println!("⚠️ Need at least 2 PDF files to merge.");
            }
            Err(e @ Error::OutputUnavailable { .. }) => {
                warn!("{}", e);
                eprintln!("❌ Error creating merged PDF file.");
            }
            Err(e) => {
                warn!("{}", e);
                eprintln!("❌ Error writing merged PDF file: {}", e);
            }
        }
    }

    /// Empty the queue
    pub fn clear_list(&mut self) {
        debug!(dropped = self.queue.len(), "clearing merge queue");
        self.queue.clear();
        println!("🗑 Cleared all added PDF files from queue.");
    }
}
