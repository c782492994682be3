use std::path::PathBuf;

/// ReportSummary - Response DTO of the report generation use case
#[derive(Debug, Clone, Default)]
pub struct ReportSummary {
    pub solutions_scanned: usize,
    pub projects_scanned: usize,
    /// Every project in the graph, including ones only seen as references
    pub projects_total: usize,
    pub reports_written: Vec<PathBuf>,
    /// Per-project outputs skipped because the project's directory is missing
    pub projects_skipped: Vec<String>,
}

impl ReportSummary {
    pub fn report_count(&self) -> usize {
        self.reports_written.len()
    }
}
