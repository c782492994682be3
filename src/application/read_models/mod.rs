//! Read models for the report assembler
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of the hierarchy for rendering.

pub mod project_report_view;
pub mod report_view_builder;

pub use project_report_view::{ProjectReportView, SolutionReportView};
pub use report_view_builder::ReportViewBuilder;
