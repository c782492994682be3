//! Renderers over a finished [`ProjectGraph`].
//!
//! Every renderer is a [`HierarchyVisitor`] driven by [`walk`], a depth-first
//! traversal from one root project. `walk` tracks the projects on the current
//! path: a child that is already on the path is still reported (so its edge
//! is rendered) but is not descended into, which keeps reference cycles from
//! recursing forever. Shared children without a cycle are visited once per
//! path.

pub mod directed_graph;
pub mod edge_set;
pub mod graphml;
pub mod nested_tags;

pub use directed_graph::{directed_graph_document, render_directed_graph};
pub use edge_set::{render_edge_set, EdgeSet};
pub use graphml::{graphml_document, render_graphml};
pub use nested_tags::render_nested_tags;

use crate::hierarchy::domain::{ProjectGraph, ProjectId};
use std::collections::HashSet;
use tracing::warn;

/// Declaration line prefixed to the DGML and GraphML documents
pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>\n";

/// One visited project during a [`walk`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub project: ProjectId,
    pub parent: Option<ProjectId>,
    pub depth: usize,
    /// Whether the project's children are visited next. False for leaves
    /// and for projects that close a cycle.
    pub expanded: bool,
    pub closes_cycle: bool,
}

pub trait HierarchyVisitor {
    fn enter(&mut self, graph: &ProjectGraph, visit: &Visit);

    fn leave(&mut self, _graph: &ProjectGraph, _visit: &Visit) {}
}

/// Depth-first, pre-order traversal of everything reachable from `root`
pub fn walk<V: HierarchyVisitor>(graph: &ProjectGraph, root: ProjectId, visitor: &mut V) {
    let mut visiting = HashSet::new();
    visit(graph, root, None, 0, &mut visiting, visitor);
}

fn visit<V: HierarchyVisitor>(
    graph: &ProjectGraph,
    id: ProjectId,
    parent: Option<ProjectId>,
    depth: usize,
    visiting: &mut HashSet<ProjectId>,
    visitor: &mut V,
) {
    let project = graph.project(id);
    let closes_cycle = !visiting.insert(id);
    if closes_cycle {
        warn!(
            project = project.display_name(),
            "Project reference cycle detected; not descending again"
        );
    }

    let current = Visit {
        project: id,
        parent,
        depth,
        expanded: !closes_cycle && !project.sub_projects().is_empty(),
        closes_cycle,
    };

    visitor.enter(graph, &current);
    if current.expanded {
        for &child in project.sub_projects() {
            visit(graph, child, Some(id), depth + 1, visiting, visitor);
        }
    }
    visitor.leave(graph, &current);

    if !closes_cycle {
        visiting.remove(&id);
    }
}

/// Escapes text for use in XML attribute values and element content
pub(crate) fn xml_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
