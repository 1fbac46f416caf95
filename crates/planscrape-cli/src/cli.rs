use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extract development applications from council planning register PDFs.
#[derive(Parser, Debug)]
#[command(name = "planscrape", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract records from a decoded-page JSON dump
    Extract {
        /// Path to the dump: a JSON array of decoded pages
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Source PDF URL recorded on each record
        #[arg(long, default_value = "file://replay")]
        source_url: String,
    },

    /// List the PDF links on a register index page
    Links {
        /// Index page URL (defaults to the configured register)
        #[arg(long)]
        url: Option<String>,
    },
}

/// Output format for the extract subcommand.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One record per line, pipe-separated
    Text,
    /// JSON array of records
    Json,
}
