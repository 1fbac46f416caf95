use std::fs;
use std::path::Path;

use planscrape::{
    scan_document, InMemoryDocument, MemoryStore, PageContent, ScrapeConfig,
};

use crate::cli::OutputFormat;

pub fn run(file: &Path, format: OutputFormat, source_url: &str) -> Result<(), i32> {
    let text = fs::read_to_string(file).map_err(|e| {
        eprintln!("Error reading {}: {e}", file.display());
        1
    })?;

    let pages: Vec<PageContent> = serde_json::from_str(&text).map_err(|e| {
        eprintln!("Error parsing {}: {e}", file.display());
        1
    })?;

    let document = InMemoryDocument::new(pages);
    let mut store = MemoryStore::new();
    let summary = scan_document(&document, source_url, &ScrapeConfig::default(), &mut store)
        .map_err(|e| {
            eprintln!("Extraction failed: {e}");
            1
        })?;

    match format {
        OutputFormat::Text => {
            for record in store.records() {
                println!(
                    "{} | {} | {} | {}",
                    record.application_number,
                    record.address,
                    record.description,
                    record.received_date
                );
            }
            eprintln!(
                "{} page(s), {} record(s), {} warning(s)",
                summary.pages, summary.inserted, summary.warnings
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(store.records()).map_err(|e| {
                eprintln!("Error encoding records: {e}");
                1
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
