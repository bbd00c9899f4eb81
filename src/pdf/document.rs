//! Document kinds and their info blocks

use std::fmt;
use std::str::FromStr;
use chrono::NaiveDate;
use crate::date::{format_creation_date, today};
use crate::error::{Error, Result};

/// Separator line shared by every report this crate prints or writes
pub const RULE: &str = "-----------------------------";

/// A PDF document with an author and a creation date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    name: String,
    page_count: u32,
    author: String,
    creation_date: NaiveDate,
}

impl PdfDocument {
    /// Create a document stamped with today's local date
    pub fn new(name: impl Into<String>, page_count: u32, author: impl Into<String>) -> Self {
        Self::with_creation_date(name, page_count, author, today())
    }

    /// Create a document with an explicit creation date
    pub fn with_creation_date(
        name: impl Into<String>,
        page_count: u32,
        author: impl Into<String>,
        creation_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            page_count,
            author: author.into(),
            creation_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pages(&self) -> u32 {
        self.page_count
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Creation date rendered as `YYYY-MM-DD`
    pub fn creation_date(&self) -> String {
        format_creation_date(&self.creation_date)
    }

    /// Info block as printed by [`PdfDocument::display_info`]
    pub fn info_block(&self) -> String {
        format!(
            "\n📄 PDF Document Info\n{RULE}\nFile Name: {}\nAuthor: {}\nPages: {}\nCreated On: {}\n",
            self.name,
            self.author,
            self.page_count,
            self.creation_date()
        )
    }

    /// Print the info block to stdout
    pub fn display_info(&self) {
        print!("{}", self.info_block());
    }
}

/// Any document the tool knows about
///
/// Only one specialised kind exists, so the set is closed: a plain document
/// carries a name and a page count, a PDF document carries its own fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Plain { name: String, page_count: u32 },
    Pdf(PdfDocument),
}

impl Document {
    /// Create a plain document
    pub fn new(name: impl Into<String>, page_count: u32) -> Self {
        Document::Plain {
            name: name.into(),
            page_count,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Document::Plain { name, .. } => name,
            Document::Pdf(pdf) => pdf.name(),
        }
    }

    pub fn pages(&self) -> u32 {
        match self {
            Document::Plain { page_count, .. } => *page_count,
            Document::Pdf(pdf) => pdf.pages(),
        }
    }

    /// Info block for whichever kind this is
    pub fn info_block(&self) -> String {
        match self {
            Document::Plain { name, page_count } => {
                format!("Document Name: {}\nNumber of Pages: {}\n", name, page_count)
            }
            Document::Pdf(pdf) => pdf.info_block(),
        }
    }

    /// Print the info block to stdout
    pub fn display_info(&self) {
        print!("{}", self.info_block());
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::new("Untitled", 0)
    }
}

impl From<PdfDocument> for Document {
    fn from(pdf: PdfDocument) -> Self {
        Document::Pdf(pdf)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info_block())
    }
}

/// A `NAME:PAGES:AUTHOR` triple given on the command line
///
/// The name may itself contain colons; pages and author are taken from the
/// right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSpec {
    pub name: String,
    pub page_count: u32,
    pub author: String,
}

impl DocumentSpec {
    /// Build the document, stamping it with `creation_date`
    pub fn into_document(self, creation_date: NaiveDate) -> PdfDocument {
        PdfDocument::with_creation_date(self.name, self.page_count, self.author, creation_date)
    }
}

impl FromStr for DocumentSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDocumentSpec(format!("expected NAME:PAGES:AUTHOR, got '{}'", s));

        let mut parts = s.rsplitn(3, ':');
        let author = parts.next().ok_or_else(invalid)?;
        let pages = parts.next().ok_or_else(invalid)?;
        let name = parts.next().ok_or_else(invalid)?;

        let page_count: u32 = pages.trim().parse()
            .map_err(|_| Error::InvalidDocumentSpec(format!("Invalid page count: {}", pages)))?;

        Ok(DocumentSpec {
            name: name.to_string(),
            page_count,
            author: author.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
    }

    #[test]
    fn test_default_document() {
        let doc = Document::default();
        assert_eq!(doc.name(), "Untitled");
        assert_eq!(doc.pages(), 0);
    }

    #[test]
    fn test_plain_info_block() {
        let doc = Document::new("notes.txt", 3);
        assert_eq!(doc.info_block(), "Document Name: notes.txt\nNumber of Pages: 3\n");
        assert!(!doc.info_block().contains("Author"));
    }

    #[test]
    fn test_pdf_info_block() {
        let pdf = PdfDocument::with_creation_date("Report2025.pdf", 15, "Bob", fixed_date());
        assert_eq!(
            pdf.info_block(),
            "\n📄 PDF Document Info\n-----------------------------\n\
             File Name: Report2025.pdf\nAuthor: Bob\nPages: 15\nCreated On: 2025-04-02\n"
        );
    }

    #[test]
    fn test_pdf_through_document_uses_pdf_format() {
        let pdf = PdfDocument::with_creation_date("ThesisIntro.pdf", 12, "Charlie", fixed_date());
        let doc: Document = pdf.clone().into();

        assert_eq!(doc.info_block(), pdf.info_block());
        assert_eq!(doc.to_string(), pdf.info_block());
        assert!(doc.info_block().contains("Author: Charlie"));
        assert!(doc.info_block().contains("Created On: 2025-04-02"));
        assert!(!doc.info_block().contains("Document Name:"));
        assert_eq!(doc.name(), "ThesisIntro.pdf");
        assert_eq!(doc.pages(), 12);
    }

    #[test]
    fn test_new_stamps_today() {
        let pdf = PdfDocument::new("a.pdf", 1, "Alice");
        assert_eq!(pdf.creation_date(), format_creation_date(&today()));
        assert_eq!(pdf.author(), "Alice");
    }

    #[test]
    fn test_parse_document_spec() {
        let spec: DocumentSpec = "Assignment1.pdf:10:Alice".parse().unwrap();
        assert_eq!(spec.name, "Assignment1.pdf");
        assert_eq!(spec.page_count, 10);
        assert_eq!(spec.author, "Alice");

        let pdf = spec.into_document(fixed_date());
        assert_eq!(pdf.creation_date(), "2025-04-02");
    }

    #[test]
    fn test_parse_document_spec_name_with_colon() {
        let spec: DocumentSpec = "C:report.pdf:4:Dana".parse().unwrap();
        assert_eq!(spec.name, "C:report.pdf");
        assert_eq!(spec.page_count, 4);
        assert_eq!(spec.author, "Dana");
    }

    #[test]
    fn test_parse_document_spec_invalid() {
        assert!("missing-fields".parse::<DocumentSpec>().is_err());
        assert!("a.pdf:Alice".parse::<DocumentSpec>().is_err());
        assert!(matches!(
            "a.pdf:-3:Alice".parse::<DocumentSpec>().unwrap_err(),
            Error::InvalidDocumentSpec(_)
        ));
    }
}
