use super::ScanReport;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, scan: &ScanReport) -> Result<()> {
        let report = JsonReport::from_scan(scan);
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    root: String,
    package: &'a str,
    r_files: Vec<String>,
    source_files: Vec<String>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    r_files: usize,
    source_files: usize,
}

impl<'a> JsonReport<'a> {
    fn from_scan(scan: &'a ScanReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            root: scan.root.display().to_string(),
            package: &scan.package,
            r_files: scan
                .r_files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            source_files: scan
                .source_files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            summary: JsonSummary {
                r_files: scan.r_files.len(),
                source_files: scan.source_files.len(),
            },
        }
    }
}
