use super::ScanReport;
use colored::Colorize;
use miette::Result;

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, scan: &ScanReport) -> Result<()> {
        if scan.source_files.is_empty() {
            println!(
                "{}",
                format!("No source files found for package '{}'.", scan.package).yellow()
            );
            return Ok(());
        }

        println!();
        println!(
            "{}",
            format!(
                "Package '{}' under {}:",
                scan.package,
                scan.root.display()
            )
            .cyan()
            .bold()
        );
        println!();

        if scan.r_files.is_empty() {
            println!("{}", "No resource-mapping files found.".yellow());
        } else {
            println!(
                "{}",
                format!("Resource-mapping files ({}):", scan.r_files.len())
                    .yellow()
                    .bold()
            );
            for file in &scan.r_files {
                println!("  {} {}", "●".green().bold(), file.display());
            }
        }
        println!();

        println!(
            "{}",
            format!("Source files ({}):", scan.source_files.len())
                .yellow()
                .bold()
        );
        for file in &scan.source_files {
            println!("  {} {}", "○".dimmed(), file.display());
        }

        println!();
        println!("{}", "─".repeat(60).dimmed());
        println!(
            "Summary: {}, {}",
            format!("{} resource-mapping files", scan.r_files.len()).green(),
            format!("{} source files", scan.source_files.len()).cyan()
        );

        Ok(())
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
