mod cli;

use cli::Args;
use project_hierarchy::adapters::outbound::console::StderrProgressReporter;
use project_hierarchy::adapters::outbound::filesystem::{
    DirectoryTreeLister, FileSystemReader, FileSystemWriter, StdoutPresenter, WalkDirScanner,
};
use project_hierarchy::adapters::outbound::formatters::MarkdownFormatter;
use project_hierarchy::adapters::outbound::graphviz::GraphvizRenderer;
use project_hierarchy::application::dto::ReportRequest;
use project_hierarchy::application::use_cases::GenerateReportsUseCase;
use project_hierarchy::config::{discover_config, load_config_from_path, merge_layout, merge_options};
use project_hierarchy::ports::outbound::OutputPresenter;
use project_hierarchy::shared::error::{ExitCode, HierarchyError};
use project_hierarchy::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let args = Args::parse_args();
    init_tracing(args.log_level());

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` takes precedence over `-v`
fn init_tracing(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(args: Args) -> Result<()> {
    tracing::debug!("Parsed CLI arguments: {:?}", args);

    let scan_root = PathBuf::from(&args.path);
    validate_project_path(&scan_root)?;

    if args.directory_tree {
        let listing = DirectoryTreeLister::new(args.include_filenames).render(&scan_root)?;
        return StdoutPresenter::new().present(&listing);
    }

    // Explicit config must exist; otherwise look in the scan root
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(Path::new(path))?),
        None => discover_config(&scan_root)?,
    };
    let options = merge_options(&args.overrides(), config.as_ref())?;
    let layout = merge_layout(config.as_ref());

    // Create adapters (Dependency Injection)
    let use_case = GenerateReportsUseCase::new(
        WalkDirScanner::new(),
        FileSystemReader::new(),
        FileSystemWriter::new(),
        MarkdownFormatter::new(),
        GraphvizRenderer::new(),
        StderrProgressReporter::new(),
    );

    let summary = use_case.execute(ReportRequest::new(scan_root, options, layout))?;
    tracing::debug!(
        solutions = summary.solutions_scanned,
        projects = summary.projects_scanned,
        skipped = summary.projects_skipped.len(),
        "Run complete"
    );

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(HierarchyError::InvalidScanPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for the scan root
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| HierarchyError::InvalidScanPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(HierarchyError::InvalidScanPath {
            path: path.to_path_buf(),
            reason: "Security: Scan path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(HierarchyError::InvalidScanPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
