mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use miette::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Output format for scan reports
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// The files located for one package query.
#[derive(Debug)]
pub struct ScanReport {
    /// Root of the scanned source tree
    pub root: PathBuf,

    /// Package the scan was scoped to
    pub package: String,

    /// Resource-mapping files declaring the package
    pub r_files: Vec<PathBuf>,

    /// All source files declaring the package (resource-mapping files
    /// included)
    pub source_files: Vec<PathBuf>,
}

impl ScanReport {
    pub fn new(
        root: PathBuf,
        package: String,
        r_files: BTreeSet<PathBuf>,
        source_files: BTreeSet<PathBuf>,
    ) -> Self {
        Self {
            root,
            package,
            r_files: r_files.into_iter().collect(),
            source_files: source_files.into_iter().collect(),
        }
    }
}

/// Reporter for outputting the located file sets
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
        }
    }

    /// Report the located files
    pub fn report(&self, scan: &ScanReport) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new();
                reporter.report(scan)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone());
                reporter.report(scan)
            }
        }
    }
}
