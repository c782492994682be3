use super::{walk, HierarchyVisitor, Visit};
use crate::hierarchy::domain::{ProjectGraph, ProjectId};

/// Spaces added per nesting level
const INDENT_WIDTH: usize = 3;

/// Renders the hierarchy below `root` as indented tags.
///
/// Leaves become self-closing tags, projects with children wrap them in an
/// open/close pair. Names have the project extension stripped.
pub fn render_nested_tags(graph: &ProjectGraph, root: ProjectId) -> String {
    let mut renderer = NestedTagRenderer::default();
    walk(graph, root, &mut renderer);
    renderer.output
}

#[derive(Default)]
struct NestedTagRenderer {
    output: String,
}

impl HierarchyVisitor for NestedTagRenderer {
    fn enter(&mut self, graph: &ProjectGraph, visit: &Visit) {
        let indentation = " ".repeat(visit.depth * INDENT_WIDTH);
        let name = graph.short_name(visit.project);
        if visit.expanded {
            self.output.push_str(&format!("{}<{}>\n", indentation, name));
        } else {
            self.output.push_str(&format!("{}<{}/>\n", indentation, name));
        }
    }

    fn leave(&mut self, graph: &ProjectGraph, visit: &Visit) {
        if visit.expanded {
            let indentation = " ".repeat(visit.depth * INDENT_WIDTH);
            self.output.push_str(&format!(
                "{}</{}>\n",
                indentation,
                graph.short_name(visit.project)
            ));
        }
    }
}
