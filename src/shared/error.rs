use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a broken installation from a
/// bad invocation or a failed scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// All requested reports were generated
    Success = 0,
    /// Scanning, parsing or report writing failed
    ApplicationError = 1,
    /// Invalid command-line arguments or option values
    InvalidArguments = 2,
    /// The external graph renderer (Graphviz) is not installed
    MissingDependency = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching the innermost known error in the chain.
    pub fn for_error(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if let Some(err) = cause.downcast_ref::<HierarchyError>() {
                return match err {
                    HierarchyError::MissingGraphRenderer { .. } => ExitCode::MissingDependency,
                    HierarchyError::UnsupportedImageFormat { .. }
                    | HierarchyError::InvalidConfig { .. } => ExitCode::InvalidArguments,
                    _ => ExitCode::ApplicationError,
                };
            }
        }
        ExitCode::ApplicationError
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::MissingDependency => write!(f, "Missing Dependency (3)"),
        }
    }
}

/// Application-specific errors for hierarchy scanning and report generation.
#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("Invalid scan path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory with --path")]
    InvalidScanPath { path: PathBuf, reason: String },

    #[error("Failed to scan directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that every directory under the scan root is readable")]
    ScanError { path: PathBuf, details: String },

    #[error("Failed to read descriptor file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    DescriptorReadError { path: PathBuf, details: String },

    #[error("Failed to write report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ReportWriteError { path: PathBuf, details: String },

    #[error("Illegal image format: {format}\n\n💡 Hint: Valid formats: {valid}")]
    UnsupportedImageFormat { format: String, valid: String },

    #[error("Required program '{program}' not found\n\n💡 Hint: {hint}")]
    MissingGraphRenderer { program: String, hint: String },

    #[error("Failed to render image: {path}\nDetails: {details}")]
    ImageRenderError { path: PathBuf, details: String },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}
