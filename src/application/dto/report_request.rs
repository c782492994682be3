use super::ImageFormat;
use std::path::PathBuf;

/// Which renderers and reports a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Per-project Markdown readme with the nested-tag hierarchy
    pub project_hierarchy: bool,
    /// Per-solution Markdown readme with the package matrix
    pub solution_readme: bool,
    /// Per-project DGML file
    pub directed_graph: bool,
    /// Per-project GraphML file
    pub graphml: bool,
    /// Per-project image rendered by Graphviz
    pub image: bool,
    pub image_format: ImageFormat,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            project_hierarchy: false,
            solution_readme: true,
            directed_graph: false,
            graphml: false,
            image: false,
            image_format: ImageFormat::default(),
        }
    }
}

/// File name suffixes that identify descriptor and source files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanLayout {
    pub project_extension: String,
    pub solution_extension: String,
    pub source_extension: String,
}

impl Default for ScanLayout {
    fn default() -> Self {
        Self {
            project_extension: ".csproj".to_string(),
            solution_extension: ".sln".to_string(),
            source_extension: ".cs".to_string(),
        }
    }
}

/// ReportRequest - Internal request DTO for the report generation use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Directory to scan; solution readmes are written here
    pub root: PathBuf,
    pub options: ReportOptions,
    pub layout: ScanLayout,
}

impl ReportRequest {
    pub fn new(root: PathBuf, options: ReportOptions, layout: ScanLayout) -> Self {
        Self {
            root,
            options,
            layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_only_generate_solution_readme() {
        let options = ReportOptions::default();
        assert!(options.solution_readme);
        assert!(!options.project_hierarchy);
        assert!(!options.directed_graph);
        assert!(!options.graphml);
        assert!(!options.image);
        assert_eq!(options.image_format, ImageFormat::PNG);
    }

    #[test]
    fn test_default_layout() {
        let layout = ScanLayout::default();
        assert_eq!(layout.project_extension, ".csproj");
        assert_eq!(layout.solution_extension, ".sln");
        assert_eq!(layout.source_extension, ".cs");
    }
}
