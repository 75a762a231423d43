//! Command line front end for pagetone.
//!
//! Scans a directory of saved webpage text files, computes the metric row
//! for each, and writes a CSV with one row per readable file. A file that
//! cannot be read as text fails its own row with a logged warning; the run
//! continues with the remaining files.

mod scan;

pub use scan::{list_files, read_document, ScanError};

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pagetone_metrics::{MetricRow, ProperNounPolicy};

/// Calculate tone and readability metrics for a directory of webpage text files.
#[derive(Debug, Parser)]
#[command(name = "pagetone", version)]
pub struct Cli {
    /// Directory containing one text file per captured webpage
    pub path: PathBuf,

    /// Destination CSV path
    pub outfile: PathBuf,

    /// Exclude proper nouns from readability statistics
    #[arg(long)]
    pub strip_proper_nouns: bool,
}

/// Counts reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_written: usize,
    pub files_failed: usize,
}

/// Process every file of `cli.path` into `cli.outfile`.
pub fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let policy = if cli.strip_proper_nouns {
        ProperNounPolicy::Strip
    } else {
        ProperNounPolicy::Keep
    };

    let files = list_files(&cli.path)?;
    let mut writer = csv::Writer::from_path(&cli.outfile)
        .with_context(|| format!("failed to open output csv {}", cli.outfile.display()))?;

    let mut summary = RunSummary::default();
    for path in &files {
        let text = match read_document(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%err, "skipping unreadable file");
                summary.files_failed += 1;
                continue;
            }
        };
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let row = MetricRow::compute(filename, &text, policy);
        writer
            .serialize(&row)
            .with_context(|| format!("failed to write row for {}", path.display()))?;
        summary.rows_written += 1;
    }

    writer.flush().context("failed to flush output csv")?;
    tracing::info!(
        rows = summary.rows_written,
        failed = summary.files_failed,
        "scan complete"
    );
    Ok(summary)
}
