use super::{walk, HierarchyVisitor, Visit};
use crate::hierarchy::domain::{ProjectGraph, ProjectId};
use std::collections::HashSet;

/// De-duplicated nodes and edges reachable from one root project, in
/// first-visit order, for an external graph layout engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
}

impl EdgeSet {
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// `(parent, child)` display-name pairs
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }
}

pub fn render_edge_set(graph: &ProjectGraph, root: ProjectId) -> EdgeSet {
    let mut collector = EdgeCollector::default();
    walk(graph, root, &mut collector);
    collector.set
}

#[derive(Default)]
struct EdgeCollector {
    seen_nodes: HashSet<ProjectId>,
    seen_edges: HashSet<(ProjectId, ProjectId)>,
    set: EdgeSet,
}

impl HierarchyVisitor for EdgeCollector {
    fn enter(&mut self, graph: &ProjectGraph, visit: &Visit) {
        let name = graph.project(visit.project).display_name();
        if self.seen_nodes.insert(visit.project) {
            self.set.nodes.push(name.to_string());
        }
        if let Some(parent) = visit.parent {
            if self.seen_edges.insert((parent, visit.project)) {
                self.set.edges.push((
                    graph.project(parent).display_name().to_string(),
                    name.to_string(),
                ));
            }
        }
    }
}
