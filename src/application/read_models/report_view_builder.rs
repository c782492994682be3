//! Builder for constructing report views from a finished hierarchy

use super::project_report_view::{ProjectReportView, SolutionReportView};
use crate::hierarchy::domain::{ProjectId, UNATTRIBUTED_SOLUTION};
use crate::hierarchy::renderers::render_nested_tags;
use crate::hierarchy::services::ProjectHierarchy;

/// Builder for constructing report views from domain objects
pub struct ReportViewBuilder;

impl ReportViewBuilder {
    /// Builds the view of one project
    pub fn project(hierarchy: &ProjectHierarchy, id: ProjectId) -> ProjectReportView {
        let graph = hierarchy.graph();
        let project = graph.project(id);

        let mut packages: Vec<String> = project.packages().iter().map(|p| p.to_string()).collect();
        packages.sort_by_key(|fact| fact.to_lowercase());

        ProjectReportView {
            display_name: project.display_name().to_string(),
            anchor: Self::anchor(project.display_name()),
            root_namespace: project.effective_root_namespace(),
            target_framework: project.target_framework().to_string(),
            included_in: hierarchy
                .membership()
                .solutions_for(project.display_name())
                .unwrap_or_default()
                .to_string(),
            packages,
            hierarchy: render_nested_tags(graph, id),
            source_file_count: None,
        }
    }

    /// Groups project views by solution key, in first-seen project order.
    ///
    /// `projects` must be indexed like the graph (one view per project id).
    /// Projects no solution lists are left out.
    pub fn solutions(
        hierarchy: &ProjectHierarchy,
        projects: &[ProjectReportView],
    ) -> Vec<SolutionReportView> {
        let graph = hierarchy.graph();
        let mut groups: Vec<(String, Vec<ProjectId>)> = Vec::new();

        for project in graph.projects() {
            let key = match hierarchy.membership().solutions_for(project.display_name()) {
                Some(key) if !key.is_empty() && key != UNATTRIBUTED_SOLUTION => key,
                _ => continue,
            };
            match groups.iter_mut().find(|(name, _)| name == key) {
                Some((_, members)) => members.push(project.id()),
                None => groups.push((key.to_string(), vec![project.id()])),
            }
        }

        groups
            .into_iter()
            .map(|(name, members)| {
                let records: Vec<_> = members.iter().map(|&id| graph.project(id)).collect();
                SolutionReportView {
                    matrix: hierarchy.packages().matrix(&name, &records),
                    projects: members
                        .iter()
                        .filter_map(|id| projects.get(id.index()).cloned())
                        .collect(),
                    name,
                }
            })
            .collect()
    }

    /// Lower-cased name with spaces replaced by dashes
    pub fn anchor(display_name: &str) -> String {
        display_name.to_lowercase().replace(' ', "-")
    }
}
