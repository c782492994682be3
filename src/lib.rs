//! project-hierarchy - documentation tool for .NET solutions
//!
//! This library scans a directory tree for solution (`.sln`) and project
//! (`.csproj`) descriptors, builds the project reference graph and writes
//! Markdown, DGML, GraphML and Graphviz reports describing it. It follows
//! a hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`hierarchy`): Project graph, descriptor parsing and renderers
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Config** (`config`): YAML configuration file support
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use project_hierarchy::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateReportsUseCase::new(
//!     WalkDirScanner::new(),
//!     FileSystemReader::new(),
//!     FileSystemWriter::new(),
//!     MarkdownFormatter::new(),
//!     GraphvizRenderer::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let options = ReportOptions {
//!     project_hierarchy: true,
//!     ..ReportOptions::default()
//! };
//! let request = ReportRequest::new(PathBuf::from("."), options, ScanLayout::default());
//! let summary = use_case.execute(request)?;
//! println!("{} report(s) written", summary.report_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod hierarchy;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectoryTreeLister, FileSystemReader, FileSystemWriter, StdoutPresenter, WalkDirScanner,
    };
    pub use crate::adapters::outbound::formatters::MarkdownFormatter;
    pub use crate::adapters::outbound::graphviz::GraphvizRenderer;
    pub use crate::application::dto::{
        ImageFormat, ReportOptions, ReportRequest, ReportSummary, ScanLayout,
    };
    pub use crate::application::read_models::{
        ProjectReportView, ReportViewBuilder, SolutionReportView,
    };
    pub use crate::application::use_cases::GenerateReportsUseCase;
    pub use crate::hierarchy::domain::{
        PackageReference, Project, ProjectGraph, ProjectId, ProjectReference,
    };
    pub use crate::hierarchy::renderers::{
        directed_graph_document, graphml_document, render_directed_graph, render_edge_set,
        render_graphml, render_nested_tags, EdgeSet,
    };
    pub use crate::hierarchy::services::{HierarchyBuilder, ProjectHierarchy};
    pub use crate::ports::outbound::{
        DescriptorReader, DescriptorScanner, ImageRenderer, OutputPresenter, ProgressReporter,
        ReportFormatter, ReportWriter,
    };
    pub use crate::shared::error::{ExitCode, HierarchyError};
    pub use crate::shared::Result;
}
