//! Printing aggregation results

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::aggregate::CountAggregator;
use crate::error::Result;

/// Result of summing a tree, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalReport {
    pub root: PathBuf,
    /// Decimal string; kept as text so precision survives JSON.
    pub total: String,
    pub files: usize,
}

impl TotalReport {
    pub fn new(root: impl Into<PathBuf>, aggregator: &CountAggregator) -> Self {
        Self {
            root: root.into(),
            total: aggregator.total(),
            files: aggregator.files_summed(),
        }
    }
}

/// Write the bare total on its own line.
pub fn write_total<W: Write>(out: &mut W, report: &TotalReport) -> io::Result<()> {
    writeln!(out, "{}", report.total)
}

pub fn write_total_json<W: Write>(out: &mut W, report: &TotalReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn print_total(report: &TotalReport) -> Result<()> {
    write_total(&mut io::stdout().lock(), report)?;
    Ok(())
}

/// Print the report as pretty-printed JSON to stdout.
pub fn print_total_json(report: &TotalReport) -> Result<()> {
    write_total_json(&mut io::stdout().lock(), report)
}
