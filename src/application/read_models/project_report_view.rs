//! View structs for the Markdown reports
//!
//! These structs provide a flattened, render-ready view of one project
//! and of one solution's member projects.

use crate::hierarchy::domain::PackageMatrix;

/// View representation of one project section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReportView {
    /// Descriptor base name, e.g. `Shop.Web.csproj`
    pub display_name: String,
    /// GitHub-style anchor for the solution readme table of contents
    pub anchor: String,
    /// Declared root namespace or the descriptor file stem
    pub root_namespace: String,
    pub target_framework: String,
    /// Membership display string; empty when no solution lists the project
    pub included_in: String,
    /// `name|version` facts sorted case-insensitively
    pub packages: Vec<String>,
    /// Nested-tag hierarchy text
    pub hierarchy: String,
    /// Number of source files below the project directory, when counted
    pub source_file_count: Option<usize>,
}

/// View representation of one solution readme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionReportView {
    /// Solution key (a membership display string)
    pub name: String,
    pub projects: Vec<ProjectReportView>,
    pub matrix: PackageMatrix,
}
