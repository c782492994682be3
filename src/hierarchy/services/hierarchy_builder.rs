use super::line_extractor::{extract_line_fact, LineFact};
use crate::hierarchy::domain::{
    PackageAggregator, ProjectGraph, ProjectId, SolutionMembership, UNATTRIBUTED_SOLUTION,
};
use crate::shared::Result;
use regex::Regex;
use std::path::Path;
use tracing::{debug, trace};

/// HierarchyBuilder service accumulating descriptor contents into a project graph.
///
/// Solution descriptors must be ingested before project descriptors so
/// each project's membership is known when its packages are attributed.
/// The builder performs no I/O; callers pass file contents in.
#[derive(Debug)]
pub struct HierarchyBuilder {
    graph: ProjectGraph,
    membership: SolutionMembership,
    packages: PackageAggregator,
    solution_entry: Regex,
    solutions_ingested: usize,
    projects_ingested: usize,
}

impl HierarchyBuilder {
    pub fn new(project_extension: &str) -> Result<Self> {
        // A quoted path whose file name ends with the project extension,
        // preceded by at least one separator
        let pattern = format!(
            r#"(?i)^.*".*[\\/](.*?{})""#,
            regex::escape(project_extension)
        );
        Ok(Self {
            graph: ProjectGraph::new(project_extension),
            membership: SolutionMembership::new(),
            packages: PackageAggregator::new(),
            solution_entry: Regex::new(&pattern)?,
            solutions_ingested: 0,
            projects_ingested: 0,
        })
    }

    /// Records every project a solution descriptor lists
    pub fn ingest_solution(&mut self, solution_name: &str, content: &str) {
        let mut entries = 0;
        for line in content.lines() {
            if let Some(captures) = self.solution_entry.captures(line) {
                self.membership.record(&captures[1], solution_name);
                entries += 1;
            }
        }
        self.solutions_ingested += 1;
        debug!(solution = solution_name, entries, "Solution descriptor ingested");
    }

    /// Parses one project descriptor into the graph and returns its record.
    ///
    /// The record is keyed by the file's base name; a later file with the
    /// same base name updates the same record and its file path.
    pub fn ingest_project(&mut self, descriptor_path: &Path, content: &str) -> ProjectId {
        let display_name = descriptor_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| descriptor_path.to_string_lossy().into_owned());

        let id = self.graph.get_or_create(&display_name);
        {
            let project = self.graph.project_mut(id);
            project.set_file_path(descriptor_path.to_path_buf());
            project.mark_descriptor_read();
        }

        let solution_key = self
            .membership
            .solutions_for(&display_name)
            .unwrap_or(UNATTRIBUTED_SOLUTION)
            .to_string();
        let project_dir = descriptor_path.parent().unwrap_or_else(|| Path::new(""));

        for line in content.lines() {
            match extract_line_fact(line) {
                Some(LineFact::Package(package)) => {
                    self.packages.record(&solution_key, package.name());
                    self.graph.add_package(id, package);
                }
                Some(LineFact::RootNamespace(namespace)) => {
                    self.graph.project_mut(id).set_root_namespace(namespace);
                }
                Some(LineFact::TargetFramework(framework)) => {
                    self.graph.project_mut(id).set_target_framework(framework);
                }
                Some(LineFact::ProjectReference(reference)) => {
                    trace!(parent = %display_name, child = %reference.file_name, "Project reference");
                    self.graph
                        .add_sub_project_reference(id, project_dir, &reference);
                }
                None => {}
            }
        }

        self.projects_ingested += 1;
        debug!(
            project = %display_name,
            sub_projects = self.graph.project(id).sub_projects().len(),
            packages = self.graph.project(id).packages().len(),
            "Project descriptor ingested"
        );
        id
    }

    pub fn graph(&self) -> &ProjectGraph {
        &self.graph
    }

    pub fn membership(&self) -> &SolutionMembership {
        &self.membership
    }

    /// Freezes the accumulated state for rendering
    pub fn finish(self) -> ProjectHierarchy {
        ProjectHierarchy {
            graph: self.graph,
            membership: self.membership,
            packages: self.packages,
            solutions_scanned: self.solutions_ingested,
            projects_scanned: self.projects_ingested,
        }
    }
}

/// Read-only result of a scan, consumed by renderers and report assembly
#[derive(Debug)]
pub struct ProjectHierarchy {
    graph: ProjectGraph,
    membership: SolutionMembership,
    packages: PackageAggregator,
    solutions_scanned: usize,
    projects_scanned: usize,
}

impl ProjectHierarchy {
    pub fn graph(&self) -> &ProjectGraph {
        &self.graph
    }

    pub fn membership(&self) -> &SolutionMembership {
        &self.membership
    }

    pub fn packages(&self) -> &PackageAggregator {
        &self.packages
    }

    pub fn solutions_scanned(&self) -> usize {
        self.solutions_scanned
    }

    pub fn projects_scanned(&self) -> usize {
        self.projects_scanned
    }
}
