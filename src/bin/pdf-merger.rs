//! PDF Merger CLI tool
//!
//! Queues documents, lists them, and writes a merge summary file.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use pdf_merger::date::{parse_date_expression, resolve_date};
use pdf_merger::pdf::{DocumentSpec, PdfDocument, PdfMerger};

/// Documents merged when none are given on the command line
const DEMO_DOCUMENTS: [(&str, u32, &str); 3] = [
    ("Assignment1.pdf", 10, "Alice"),
    ("Report2025.pdf", 15, "Bob"),
    ("ThesisIntro.pdf", 12, "Charlie"),
];

/// PDF Merger - Queue documents and write a merge summary
#[derive(Parser)]
#[command(name = "pdf-merger")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Run the built-in demo queue
    pdf-merger

    # Merge two documents into a custom output file
    pdf-merger -o handout.pdf \"intro.pdf:4:Alice\" \"appendix.pdf:2:Bob\"

    # Pin the creation date
    pdf-merger --date 2025-01-15")]
struct Cli {
    /// Documents to queue as NAME:PAGES:AUTHOR (defaults to a demo set)
    documents: Vec<DocumentSpec>,

    /// Output file path
    #[arg(short, long, default_value = "MergedProjectOutput.pdf")]
    output: PathBuf,

    /// Creation date for the documents ("today", "2025-01-15", "01/15/2025")
    #[arg(long, default_value = "today")]
    date: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let creation_date = resolve_date(&parse_date_expression(&cli.date)?);

    let documents: Vec<PdfDocument> = if cli.documents.is_empty() {
        DEMO_DOCUMENTS
            .iter()
            .map(|&(name, pages, author)| {
                PdfDocument::with_creation_date(name, pages, author, creation_date)
            })
            .collect()
    } else {
        cli.documents
            .into_iter()
            .map(|spec| spec.into_document(creation_date))
            .collect()
    };

    println!("==============================");
    println!("  PDF Document Merge Tool");
    println!("==============================");

    let mut merger = PdfMerger::new(cli.output);

    for pdf in &documents {
        merger.add_document(pdf);
    }

    merger.show_documents();
    merger.merge_pdfs();

    println!("\n-----------------------------");
    println!("📘 Individual PDF Details:");
    for pdf in &documents {
        pdf.display_info();
    }

    println!("\n🎯 Program completed successfully.");

    Ok(())
}
