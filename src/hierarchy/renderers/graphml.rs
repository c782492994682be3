use super::{walk, xml_escape, HierarchyVisitor, Visit, XML_DECLARATION};
use crate::hierarchy::domain::{ProjectGraph, ProjectId};
use std::collections::HashSet;

/// Shape node width per label character
const NODE_WIDTH_PER_CHAR: f64 = 6.3;

/// Renders the node and edge elements of a yEd GraphML graph.
///
/// Each reachable project becomes one shape node (first visit wins) sized
/// to its label; every visited edge becomes a directed `edge` element.
/// The caller wraps the result in the `graphml`/`graph` elements.
pub fn render_graphml(graph: &ProjectGraph, root: ProjectId) -> String {
    let mut renderer = GraphMlRenderer::default();
    walk(graph, root, &mut renderer);
    format!("{}\n{}", renderer.nodes.join("\n"), renderer.edges)
}

/// Opening `graphml` element with the yEd namespaces
const GRAPHML_HEADER: &str = "<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\" \
xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
xmlns:y=\"http://www.yworks.com/xml/graphml\" \
xsi:schemaLocation=\"http://graphml.graphdrawing.org/xmlns \
http://www.yworks.com/xml/schema/graphml/1.1/ygraphml.xsd\">\n";

/// Complete `.graphml` file content for the hierarchy below `root`
pub fn graphml_document(graph: &ProjectGraph, root: ProjectId) -> String {
    format!(
        "{}{}  <key for=\"node\" id=\"d0\" yfiles.type=\"nodegraphics\"/>\n  \
<graph id='G' edgedefault='directed'>\n{}  </graph>\n</graphml>\n",
        XML_DECLARATION,
        GRAPHML_HEADER,
        render_graphml(graph, root)
    )
}

#[derive(Default)]
struct GraphMlRenderer {
    seen: HashSet<ProjectId>,
    nodes: Vec<String>,
    edges: String,
}

impl GraphMlRenderer {
    fn shape_node(name: &str) -> String {
        let width = name.chars().count() as f64 * NODE_WIDTH_PER_CHAR;
        let name = xml_escape(name);
        format!(
            "   <node id=\"{name}\">\n\
             \x20    <data key=\"d0\">\n\
             \x20      <y:ShapeNode>\n\
             \x20        <y:Geometry height=\"30.0\" width=\"{width:.1}\"/>\n\
             \x20        <y:NodeLabel visible=\"true\" autoSizePolicy=\"content\">{name}</y:NodeLabel>\n\
             \x20      </y:ShapeNode>\n\
             \x20    </data>\n\
             \x20  </node>"
        )
    }
}

impl HierarchyVisitor for GraphMlRenderer {
    fn enter(&mut self, graph: &ProjectGraph, visit: &Visit) {
        let name = graph.project(visit.project).display_name();
        if self.seen.insert(visit.project) {
            self.nodes.push(Self::shape_node(name));
        }
        if let Some(parent) = visit.parent {
            self.edges.push_str(&format!(
                "   <edge directed=\"true\" source=\"{}\" target=\"{}\"/>\n",
                xml_escape(graph.project(parent).display_name()),
                xml_escape(name)
            ));
        }
    }
}
