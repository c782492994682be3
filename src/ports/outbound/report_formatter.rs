use crate::application::read_models::{ProjectReportView, SolutionReportView};

/// ReportFormatter port for rendering the Markdown readmes
pub trait ReportFormatter {
    /// Formats the per-project readme
    fn format_project_readme(&self, view: &ProjectReportView) -> String;

    /// Formats the readme of one solution and its member projects
    fn format_solution_readme(&self, view: &SolutionReportView) -> String;
}
