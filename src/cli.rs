use crate::config::{AuditConfig, DEFAULT_BACKEND_DIR, DEFAULT_FRONTEND_DIR};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// Route Audit - Checks backend route declarations against frontend API call sites
#[derive(Parser, Debug)]
#[command(name = "route-audit")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Directory containing the backend route files (scanned non-recursively)
    #[arg(short = 'b', long = "backend-dir", value_name = "DIR", default_value = DEFAULT_BACKEND_DIR)]
    pub backend_dir: PathBuf,

    /// Root of the frontend source tree (scanned recursively)
    #[arg(short = 'f', long = "frontend-dir", value_name = "DIR", default_value = DEFAULT_FRONTEND_DIR)]
    pub frontend_dir: PathBuf,

    /// Directory the JSON snapshots and the Markdown report are written into
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Pipeline stage to run
    #[arg(short = 's', long = "stage", value_enum, default_value = "full")]
    pub stage: Stage,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Pipeline stage selection. The two extractor stages are runnable standalone;
/// `full` chains extraction, reconciliation and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Stage {
    /// Extract backend routes and write backend-routes.json
    Backend,
    /// Extract frontend API references and write frontend-routes.json
    Frontend,
    /// Run the whole pipeline and write routes-report.md
    Full,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    let needs_backend = matches!(args.stage, Stage::Backend | Stage::Full);
    let needs_frontend = matches!(args.stage, Stage::Frontend | Stage::Full);

    if needs_backend && !args.backend_dir.is_dir() {
        anyhow::bail!(
            "Backend routes directory does not exist: {}",
            args.backend_dir.display()
        );
    }

    if needs_frontend && !args.frontend_dir.is_dir() {
        anyhow::bail!(
            "Frontend source directory does not exist: {}",
            args.frontend_dir.display()
        );
    }

    info!("Stage: {:?}", args.stage);
    if needs_backend {
        info!("Backend routes directory: {}", args.backend_dir.display());
    }
    if needs_frontend {
        info!("Frontend source directory: {}", args.frontend_dir.display());
    }
    info!("Output directory: {}", args.output_dir.display());

    Ok(args)
}

/// Run the requested pipeline stage(s).
///
/// Stages execute strictly in sequence with no shared mutable state; each one
/// receives immutable inputs and returns a freshly built output. Any stage
/// error aborts the run before the report is written, so a failed run never
/// leaves a partial report behind.
pub fn run(args: CliArgs) -> Result<()> {
    use crate::extractor::{backend, frontend};
    use crate::reconciler::reconcile;
    use crate::report;

    let config = AuditConfig::new(args.backend_dir, args.frontend_dir, args.output_dir);

    match args.stage {
        Stage::Backend => {
            backend::run(&config)?;
        }
        Stage::Frontend => {
            frontend::run(&config)?;
        }
        Stage::Full => {
            // Step 1: backend extraction
            info!("Step 1/3: extracting backend routes...");
            let backend_routes = backend::run(&config)?;

            // Step 2: frontend extraction
            info!("Step 2/3: extracting frontend API references...");
            let frontend_routes = frontend::run(&config)?;

            // Step 3: reconcile and report
            info!("Step 3/3: reconciling and writing report...");
            let result = reconcile(&backend_routes, &frontend_routes);
            report::write_report(&result, &config.report_path())?;
        }
    }

    info!("Audit complete");
    Ok(())
}
