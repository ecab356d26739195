use clap::Parser;
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod config;
mod discovery;
mod report;

use config::Config;
use discovery::SourceSet;
use report::{Reporter, ScanReport};

/// reverser - locate R.java resource-mapping files in decompiled Android sources
#[derive(Parser, Debug)]
#[command(name = "reverser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the decompiled source code
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Package name of the R.java file(s) to locate
    #[arg(short, long)]
    package: String,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for report::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => report::ReportFormat::Terminal,
            OutputFormat::Json => report::ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("reverser v{}", env!("CARGO_PKG_VERSION"));

    ensure_source_dir(&cli.path)?;

    // Load configuration
    let config = load_config(&cli)?;

    run_scan(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Ensure the source directory exists and is writable, creating it and any
/// missing parents when absent. The tree is rewritten in place by the
/// downstream stage, so a read-only directory is rejected up front.
fn ensure_source_dir(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(miette!("{} is not a directory", path.display()));
        }
        let metadata = fs::metadata(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to inspect {}", path.display()))?;
        if metadata.permissions().readonly() {
            return Err(miette!("{} is not a writeable directory", path.display()));
        }
        return Ok(());
    }

    fs::create_dir_all(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to create directory at {}", path.display()))
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        Config::from_file(config_path)
    } else {
        Config::from_default_locations(&cli.path)
    }
}

fn run_scan(config: &Config, cli: &Cli) -> Result<()> {
    use std::time::Instant;

    let start_time = Instant::now();

    let rules = config.scan_rules()?;
    let source_set = SourceSet::with_rules(&cli.path, rules);

    info!(
        "Scanning {} for package {}",
        cli.path.display(),
        cli.package
    );

    let r_files = source_set.r_files_in_package(&cli.package);
    let source_files = source_set.source_files_in_package(&cli.package);

    debug!(
        "Located {} resource-mapping files, {} source files",
        r_files.len(),
        source_files.len()
    );

    let scan = ScanReport::new(
        cli.path.clone(),
        cli.package.clone(),
        r_files,
        source_files,
    );

    let reporter = Reporter::new(cli.format.clone().into(), cli.output.clone());
    reporter.report(&scan)?;

    let elapsed = start_time.elapsed();
    info!("Scan completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
