use super::{walk, xml_escape, HierarchyVisitor, Visit, XML_DECLARATION};
use crate::hierarchy::domain::{ProjectGraph, ProjectId};

/// DGML namespace of the `DirectedGraph` root element
pub const DGML_NAMESPACE: &str = "http://schemas.microsoft.com/vs/2009/dgml";

/// Renders the hierarchy below `root` as a DGML `DirectedGraph` element.
///
/// One `Node` per visited project in pre-order, one `Link` per
/// parent/child edge. Nodes and links are keyed by display name.
pub fn render_directed_graph(graph: &ProjectGraph, root: ProjectId) -> String {
    let mut renderer = DirectedGraphRenderer::default();
    walk(graph, root, &mut renderer);
    format!(
        "<DirectedGraph xmlns=\"{}\">\n<Nodes>\n{}</Nodes>\n<Links>\n{}</Links>\n</DirectedGraph>",
        DGML_NAMESPACE, renderer.nodes, renderer.links
    )
}

/// Complete `.dgml` file content for the hierarchy below `root`
pub fn directed_graph_document(graph: &ProjectGraph, root: ProjectId) -> String {
    format!(
        "{}{}",
        XML_DECLARATION,
        render_directed_graph(graph, root)
    )
}

#[derive(Default)]
struct DirectedGraphRenderer {
    nodes: String,
    links: String,
}

impl HierarchyVisitor for DirectedGraphRenderer {
    fn enter(&mut self, graph: &ProjectGraph, visit: &Visit) {
        let name = xml_escape(graph.project(visit.project).display_name());
        self.nodes
            .push_str(&format!("   <Node Id=\"{}\" Label=\"{}\"/>\n", name, name));
        if let Some(parent) = visit.parent {
            self.links.push_str(&format!(
                "   <Link Source=\"{}\" Target=\"{}\"/>\n",
                xml_escape(graph.project(parent).display_name()),
                name
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::renderers::test_graphs::{cycle, diamond, link};

    #[test]
    fn test_single_project_has_node_and_no_links() {
        let mut graph = ProjectGraph::default();
        let id = graph.get_or_create("Solo.csproj");
        let dgml = render_directed_graph(&graph, id);

        assert!(dgml.starts_with("<DirectedGraph xmlns=\"http://schemas.microsoft.com/vs/2009/dgml\">"));
        assert!(dgml.contains("<Nodes>\n   <Node Id=\"Solo.csproj\" Label=\"Solo.csproj\"/>\n</Nodes>"));
        assert!(dgml.contains("<Links>\n</Links>"));
        assert!(dgml.ends_with("</DirectedGraph>"));
    }

    #[test]
    fn test_links_follow_every_edge() {
        let (graph, app) = diamond();
        let dgml = render_directed_graph(&graph, app);

        assert!(dgml.contains("   <Link Source=\"App.csproj\" Target=\"Web.csproj\"/>\n"));
        assert!(dgml.contains("   <Link Source=\"Web.csproj\" Target=\"Core.csproj\"/>\n"));
        assert!(dgml.contains("   <Link Source=\"Data.csproj\" Target=\"Core.csproj\"/>\n"));
        assert_eq!(dgml.matches("<Link ").count(), 4);
        assert_eq!(dgml.matches("<Node ").count(), 5);
    }

    #[test]
    fn test_cycle_back_edge_is_linked_once() {
        let (graph, a) = cycle();
        let dgml = render_directed_graph(&graph, a);
        assert!(dgml.contains("<Link Source=\"B.csproj\" Target=\"A.csproj\"/>"));
        assert_eq!(dgml.matches("<Link ").count(), 2);
    }

    #[test]
    fn test_document_has_xml_declaration() {
        let (graph, app) = diamond();
        let document = directed_graph_document(&graph, app);
        assert!(document.starts_with("<?xml version='1.0' encoding='utf-8'?>\n<DirectedGraph "));
    }

    #[test]
    fn test_names_are_escaped() {
        let mut graph = ProjectGraph::default();
        let root = graph.get_or_create("R&D.csproj");
        link(&mut graph, root, "Core.csproj");
        let dgml = render_directed_graph(&graph, root);
        assert!(dgml.contains("Id=\"R&amp;D.csproj\""));
        assert!(dgml.contains("Source=\"R&amp;D.csproj\""));
    }
}
