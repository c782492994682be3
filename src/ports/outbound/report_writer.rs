use crate::shared::Result;
use std::path::Path;

/// ReportWriter port for persisting generated reports
pub trait ReportWriter {
    /// Writes `content` to `path`, replacing any previous report
    ///
    /// # Errors
    /// Returns an error if the parent directory does not exist or the
    /// file cannot be written
    fn write_report(&self, path: &Path, content: &str) -> Result<()>;
}
