use crate::application::dto::{ReportRequest, ReportSummary};
use crate::application::read_models::{ProjectReportView, ReportViewBuilder};
use crate::hierarchy::domain::ProjectId;
use crate::hierarchy::renderers::{directed_graph_document, graphml_document, render_edge_set};
use crate::hierarchy::services::{HierarchyBuilder, ProjectHierarchy};
use crate::ports::outbound::{
    DescriptorReader, DescriptorScanner, ImageRenderer, ProgressReporter, ReportFormatter,
    ReportWriter,
};
use crate::shared::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// File name prefix of every per-project output
const PROJECT_REPORT_PREFIX: &str = "ReadMe-ProjectStructure-";

/// File name prefix of the per-solution readme
const SOLUTION_REPORT_PREFIX: &str = "ReadMe-SolutionStructure-";

/// GenerateReportsUseCase - Core use case for hierarchy documentation
///
/// This use case orchestrates the scan, the hierarchy build and the report
/// writing using generic dependency injection for all infrastructure
/// dependencies.
///
/// # Type Parameters
/// * `S` - DescriptorScanner implementation
/// * `R` - DescriptorReader implementation
/// * `W` - ReportWriter implementation
/// * `F` - ReportFormatter implementation
/// * `I` - ImageRenderer implementation
/// * `P` - ProgressReporter implementation
pub struct GenerateReportsUseCase<S, R, W, F, I, P> {
    scanner: S,
    reader: R,
    writer: W,
    formatter: F,
    image_renderer: I,
    progress_reporter: P,
}

impl<S, R, W, F, I, P> GenerateReportsUseCase<S, R, W, F, I, P>
where
    S: DescriptorScanner,
    R: DescriptorReader,
    W: ReportWriter,
    F: ReportFormatter,
    I: ImageRenderer,
    P: ProgressReporter,
{
    /// Creates a new GenerateReportsUseCase with injected dependencies
    pub fn new(
        scanner: S,
        reader: R,
        writer: W,
        formatter: F,
        image_renderer: I,
        progress_reporter: P,
    ) -> Self {
        Self {
            scanner,
            reader,
            writer,
            formatter,
            image_renderer,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Arguments
    /// * `request` - Scan root, report selection and descriptor layout
    ///
    /// # Returns
    /// ReportSummary listing every file written
    pub fn execute(&self, request: ReportRequest) -> Result<ReportSummary> {
        // Step 1: Fail fast when images are requested but cannot be rendered
        if request.options.image {
            self.image_renderer.ensure_available()?;
        }

        // Step 2: Scan and parse every descriptor
        let hierarchy = self.build_hierarchy(&request)?;
        let mut summary = ReportSummary {
            solutions_scanned: hierarchy.solutions_scanned(),
            projects_scanned: hierarchy.projects_scanned(),
            projects_total: hierarchy.graph().len(),
            ..ReportSummary::default()
        };

        // Step 3: Per-project outputs
        let views = self.write_project_reports(&request, &hierarchy, &mut summary)?;

        // Step 4: Per-solution readmes
        if request.options.solution_readme {
            self.write_solution_reports(&request, &hierarchy, &views, &mut summary)?;
        }

        info!(
            reports = summary.report_count(),
            projects = summary.projects_total,
            "Report generation finished"
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Generated {} report file(s) for {} project(s)",
            summary.report_count(),
            summary.projects_total
        ));
        Ok(summary)
    }

    /// Ingests all solution descriptors, then all project descriptors
    fn build_hierarchy(&self, request: &ReportRequest) -> Result<ProjectHierarchy> {
        let layout = &request.layout;
        let mut builder = HierarchyBuilder::new(&layout.project_extension)?;

        self.progress_reporter.report(&format!(
            "🔍 Scanning for {} and {} files in: {}",
            layout.solution_extension,
            layout.project_extension,
            request.root.display()
        ));

        let solutions = self
            .scanner
            .find_files(&request.root, &layout.solution_extension)?;
        for path in &solutions {
            let content = self.reader.read_descriptor(path)?;
            builder.ingest_solution(&Self::file_name(path), &content);
        }

        let projects = self
            .scanner
            .find_files(&request.root, &layout.project_extension)?;
        for path in &projects {
            let content = self.reader.read_descriptor(path)?;
            builder.ingest_project(path, &content);
        }

        self.progress_reporter.report(&format!(
            "✅ Detected {} solution(s) and {} project(s)",
            solutions.len(),
            projects.len()
        ));
        debug!(
            solutions = solutions.len(),
            projects = projects.len(),
            "Descriptors ingested"
        );

        Ok(builder.finish())
    }

    /// Builds every project view and writes the selected per-project outputs.
    ///
    /// Returns the views indexed by project id.
    fn write_project_reports(
        &self,
        request: &ReportRequest,
        hierarchy: &ProjectHierarchy,
        summary: &mut ReportSummary,
    ) -> Result<Vec<ProjectReportView>> {
        let options = &request.options;
        let per_project =
            options.project_hierarchy || options.directed_graph || options.graphml || options.image;
        let graph = hierarchy.graph();
        let total = graph.len();
        let mut views = Vec::with_capacity(total);

        for (index, project) in graph.projects().enumerate() {
            let id = project.id();
            let mut view = ReportViewBuilder::project(hierarchy, id);

            if per_project {
                self.progress_reporter
                    .report_progress(index + 1, total, Some(project.display_name()));

                let directory = project.directory();
                if !project.descriptor_read() && !self.scanner.directory_exists(directory) {
                    warn!(
                        project = project.display_name(),
                        directory = %directory.display(),
                        "Referenced project directory not found; skipping its reports"
                    );
                    self.progress_reporter.report_warning(&format!(
                        "Skipping reports for project {}: directory {} does not exist",
                        project.display_name(),
                        directory.display()
                    ));
                    summary.projects_skipped.push(project.display_name().to_string());
                } else {
                    self.write_outputs_for(request, hierarchy, id, &mut view, summary)?;
                }
            }
            views.push(view);
        }

        Ok(views)
    }

    fn write_outputs_for(
        &self,
        request: &ReportRequest,
        hierarchy: &ProjectHierarchy,
        id: ProjectId,
        view: &mut ProjectReportView,
        summary: &mut ReportSummary,
    ) -> Result<()> {
        let options = &request.options;
        let graph = hierarchy.graph();
        let project = graph.project(id);
        let directory = project.directory();
        let stem = graph.short_name(id);
        let output_path =
            |extension: &str| directory.join(format!("{}{}.{}", PROJECT_REPORT_PREFIX, stem, extension));

        if options.project_hierarchy {
            let sources = self
                .scanner
                .find_files(directory, &request.layout.source_extension)?;
            view.source_file_count = Some(sources.len());

            let path = output_path("md");
            self.progress_reporter.report(&format!(
                "📝 Generating ReadMe for project: {}, filename: {}",
                view.display_name,
                path.display()
            ));
            self.write(&path, &self.formatter.format_project_readme(view), summary)?;
        }

        if options.directed_graph {
            let path = output_path("dgml");
            self.progress_reporter.report(&format!(
                "📝 Generating directed graph (dgml) for project: {}, filename: {}",
                view.display_name,
                path.display()
            ));
            self.write(&path, &directed_graph_document(graph, id), summary)?;
        }

        if options.graphml {
            let path = output_path("graphml");
            self.progress_reporter.report(&format!(
                "📝 Generating directed graph (GraphML) for project: {}, filename: {}",
                view.display_name,
                path.display()
            ));
            self.write(&path, &graphml_document(graph, id), summary)?;
        }

        if options.image {
            let edges = render_edge_set(graph, id);
            if edges.has_edges() {
                let path = output_path(options.image_format.as_str());
                self.progress_reporter.report(&format!(
                    "🖼️  Generating image ({}) for project: {}, filename: {}",
                    options.image_format,
                    view.display_name,
                    path.display()
                ));
                self.image_renderer
                    .render(&edges, options.image_format, &path)?;
                summary.reports_written.push(path);
            } else {
                debug!(project = %view.display_name, "No references; image skipped");
            }
        }

        Ok(())
    }

    fn write_solution_reports(
        &self,
        request: &ReportRequest,
        hierarchy: &ProjectHierarchy,
        views: &[ProjectReportView],
        summary: &mut ReportSummary,
    ) -> Result<()> {
        for solution in ReportViewBuilder::solutions(hierarchy, views) {
            let stem = solution
                .name
                .replace(request.layout.solution_extension.as_str(), "");
            let path = request
                .root
                .join(format!("{}{}.md", SOLUTION_REPORT_PREFIX, stem));
            self.progress_reporter.report(&format!(
                "📝 Generating ReadMe for solution: {}, filename: {}",
                solution.name,
                path.display()
            ));
            self.write(&path, &self.formatter.format_solution_readme(&solution), summary)?;
        }
        Ok(())
    }

    fn write(&self, path: &Path, content: &str, summary: &mut ReportSummary) -> Result<()> {
        self.writer.write_report(path, content)?;
        summary.reports_written.push(path.to_path_buf());
        Ok(())
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned())
    }
}
