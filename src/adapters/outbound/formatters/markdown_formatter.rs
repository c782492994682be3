use crate::application::read_models::{ProjectReportView, SolutionReportView};
use crate::hierarchy::domain::PackageMatrix;
use crate::ports::outbound::ReportFormatter;

/// Markdown table header and separator for the base information table
const BASE_INFO_HEADER: &str = "| | |\n|-|-|\n";

/// Markdown table header and separator for a project's packages
const PACKAGE_TABLE_HEADER: &str = "|Package|Version|\n|-|-|\n";

/// Markdown table header and separator for the solution table of contents
const PROJECT_TABLE_HEADER: &str = "|Project|Root namespace|Target framework|\n|-|-|-|\n";

/// Closing line of every readme
const FILE_FOOTER: &str = "This file was autogenerated by project-hierarchy.\n";

/// MarkdownFormatter adapter for the project and solution readmes
///
/// This adapter implements the ReportFormatter port. Table cells are
/// escaped; the hierarchy is embedded verbatim in an `xml` code block.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_base_info(output: &mut String, view: &ProjectReportView) {
        output.push_str(BASE_INFO_HEADER);
        output.push_str(&format!(
            "|Root namespace|{}|\n",
            Self::escape_markdown_table_cell(&view.root_namespace)
        ));
        output.push_str(&format!(
            "|Target framework|{}|\n",
            Self::escape_markdown_table_cell(&view.target_framework)
        ));
    }

    fn render_hierarchy(output: &mut String, view: &ProjectReportView) {
        output.push_str("The following structure shows the project hierarchy:\n\n");
        output.push_str("```xml\n");
        output.push_str(&view.hierarchy);
        output.push_str("```\n");
    }

    fn render_packages(output: &mut String, view: &ProjectReportView) {
        output.push_str(PACKAGE_TABLE_HEADER);
        for fact in &view.packages {
            // The stored fact already reads `name|version`
            let (name, version) = fact.split_once('|').unwrap_or((fact.as_str(), ""));
            output.push_str(&format!(
                "|{}|{}|\n",
                Self::escape_markdown_table_cell(name),
                Self::escape_markdown_table_cell(version)
            ));
        }
    }

    fn render_matrix(output: &mut String, matrix: &PackageMatrix) {
        output.push_str("|Project");
        for column in &matrix.columns {
            output.push('|');
            output.push_str(&Self::escape_markdown_table_cell(column));
        }
        output.push_str("|\n|-");
        output.push_str(&"|-".repeat(matrix.columns.len()));
        output.push_str("|\n");

        for row in &matrix.rows {
            output.push('|');
            output.push_str(&Self::escape_markdown_table_cell(&row.project));
            for version in &row.versions {
                output.push('|');
                if let Some(version) = version {
                    output.push_str(&Self::escape_markdown_table_cell(version));
                }
            }
            output.push_str("|\n");
        }
    }

    fn render_table_of_contents(output: &mut String, projects: &[ProjectReportView]) {
        output.push_str(PROJECT_TABLE_HEADER);
        for project in projects {
            output.push_str(&format!(
                "|[{}](#{})|{}|{}|\n",
                Self::escape_markdown_table_cell(&project.display_name),
                project.anchor,
                Self::escape_markdown_table_cell(&project.root_namespace),
                Self::escape_markdown_table_cell(&project.target_framework)
            ));
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_project_readme(&self, view: &ProjectReportView) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Project {}\n\n", view.display_name));
        Self::render_base_info(&mut output, view);
        if let Some(count) = view.source_file_count {
            output.push_str(&format!("|Number of source files|{}|\n", count));
        }
        output.push_str(&format!(
            "|Project included in|{}|\n\n",
            Self::escape_markdown_table_cell(&view.included_in)
        ));

        output.push_str("## Packages\n\n");
        Self::render_packages(&mut output, view);
        output.push('\n');

        output.push_str("## Project hierarchy\n\n");
        Self::render_hierarchy(&mut output, view);
        output.push('\n');

        output.push_str(FILE_FOOTER);
        output
    }

    fn format_solution_readme(&self, view: &SolutionReportView) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", view.name));

        output.push_str("## Projects\n\n");
        Self::render_table_of_contents(&mut output, &view.projects);
        output.push('\n');

        output.push_str("## Packages\n\n");
        Self::render_matrix(&mut output, &view.matrix);
        output.push('\n');

        for project in &view.projects {
            output.push_str(&format!(
                "## Project {}<a name=\"{}\"></a>\n\n",
                project.display_name, project.anchor
            ));
            Self::render_base_info(&mut output, project);
            output.push('\n');
            Self::render_hierarchy(&mut output, project);
            output.push('\n');
        }

        output.push_str(FILE_FOOTER);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::domain::PackageMatrixRow;

    fn project_view(name: &str) -> ProjectReportView {
        ProjectReportView {
            display_name: format!("{}.csproj", name),
            anchor: format!("{}.csproj", name.to_lowercase()),
            root_namespace: format!("Shop.{}", name),
            target_framework: "net8.0".to_string(),
            included_in: "Shop.sln".to_string(),
            packages: vec!["Newtonsoft.Json|13.0.1".to_string(), "Serilog|3.1.0".to_string()],
            hierarchy: format!("<{}>\n   <Core/>\n</{}>\n", name, name),
            source_file_count: Some(4),
        }
    }

    #[test]
    fn test_project_readme_layout() {
        let readme = MarkdownFormatter::new().format_project_readme(&project_view("Web"));
        let expected = "\
# Project Web.csproj

| | |
|-|-|
|Root namespace|Shop.Web|
|Target framework|net8.0|
|Number of source files|4|
|Project included in|Shop.sln|

## Packages

|Package|Version|
|-|-|
|Newtonsoft.Json|13.0.1|
|Serilog|3.1.0|

## Project hierarchy

The following structure shows the project hierarchy:

```xml
<Web>
   <Core/>
</Web>
```

This file was autogenerated by project-hierarchy.
";
        assert_eq!(readme, expected);
    }

    #[test]
    fn test_project_readme_without_source_count() {
        let mut view = project_view("Web");
        view.source_file_count = None;
        let readme = MarkdownFormatter::new().format_project_readme(&view);
        assert!(!readme.contains("Number of source files"));
        assert!(readme.contains("|Target framework|net8.0|\n|Project included in|Shop.sln|\n"));
    }

    #[test]
    fn test_table_cells_are_escaped() {
        let mut view = project_view("Web");
        view.target_framework = "net48|net8.0".to_string();
        let readme = MarkdownFormatter::new().format_project_readme(&view);
        assert!(readme.contains("|Target framework|net48\\|net8.0|"));
    }

    #[test]
    fn test_solution_readme_layout() {
        let view = SolutionReportView {
            name: "Shop.sln".to_string(),
            projects: vec![project_view("Web"), project_view("Api")],
            matrix: PackageMatrix {
                columns: vec!["A".to_string(), "B".to_string()],
                rows: vec![
                    PackageMatrixRow {
                        project: "P1".to_string(),
                        versions: vec![Some("1.0".to_string()), None],
                    },
                    PackageMatrixRow {
                        project: "P2".to_string(),
                        versions: vec![Some("2.0".to_string()), Some("3.0".to_string())],
                    },
                ],
            },
        };
        let readme = MarkdownFormatter::new().format_solution_readme(&view);

        assert!(readme.starts_with("# Shop.sln\n\n## Projects\n\n"));
        assert!(readme.contains(
            "|Project|Root namespace|Target framework|\n|-|-|-|\n\
             |[Web.csproj](#web.csproj)|Shop.Web|net8.0|\n\
             |[Api.csproj](#api.csproj)|Shop.Api|net8.0|\n"
        ));
        assert!(readme.contains("## Packages\n\n|Project|A|B|\n|-|-|-|\n|P1|1.0||\n|P2|2.0|3.0|\n"));
        assert!(readme.contains("## Project Web.csproj<a name=\"web.csproj\"></a>\n\n| | |\n|-|-|\n"));
        assert!(readme.contains("## Project Api.csproj<a name=\"api.csproj\"></a>"));
        assert!(!readme.contains("## Packages\n\n|Package|Version|"));
        assert!(readme.ends_with("This file was autogenerated by project-hierarchy.\n"));
    }

    #[test]
    fn test_empty_matrix_still_has_header() {
        let view = SolutionReportView {
            name: "Empty.sln".to_string(),
            projects: vec![],
            matrix: PackageMatrix {
                columns: vec![],
                rows: vec![],
            },
        };
        let readme = MarkdownFormatter::new().format_solution_readme(&view);
        assert!(readme.contains("## Packages\n\n|Project|\n|-|\n\n"));
    }
}
