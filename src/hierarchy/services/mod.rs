/// Services: descriptor line extraction and graph assembly
pub mod hierarchy_builder;
pub mod line_extractor;

pub use hierarchy_builder::{HierarchyBuilder, ProjectHierarchy};
pub use line_extractor::{extract_line_fact, LineFact};
