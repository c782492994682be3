use crate::ports::outbound::{OutputPresenter, ReportWriter};
use crate::shared::error::HierarchyError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// FileSystemWriter adapter for writing reports to files
///
/// This adapter implements the ReportWriter port. Existing reports are
/// overwritten; symbolic links are never written through.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
        HierarchyError::ReportWriteError {
            path: path.to_path_buf(),
            details: details.into(),
        }
        .into()
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(Self::write_error(
                    path,
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }
        Ok(())
    }

    /// Security validation before writing: reject an existing output path
    /// that is a symbolic link
    fn validate_output_security(path: &Path) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(Self::write_error(
                    path,
                    "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.",
                ));
            }
        }
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWriter for FileSystemWriter {
    fn write_report(&self, path: &Path, content: &str) -> Result<()> {
        Self::validate_parent_directory(path)?;
        Self::validate_output_security(path)?;

        fs::write(path, content).map_err(|e| Self::write_error(path, e.to_string()))
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
