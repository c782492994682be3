use crate::application::dto::ImageFormat;
use crate::hierarchy::renderers::EdgeSet;
use crate::ports::outbound::ImageRenderer;
use crate::shared::error::HierarchyError;
use crate::shared::Result;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// Executable looked up on `PATH`
const DOT_PROGRAM: &str = "dot";

/// GraphvizRenderer adapter driving the `dot` layout program
///
/// The graph is written to `dot` on stdin; `dot` writes the image file.
pub struct GraphvizRenderer {
    program: String,
}

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self::with_program(DOT_PROGRAM)
    }

    /// Uses another executable in place of `dot`
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn missing_program(&self) -> anyhow::Error {
        HierarchyError::MissingGraphRenderer {
            program: self.program.clone(),
            hint: "Install Graphviz (https://graphviz.org/download/) and make sure its bin directory is on PATH".to_string(),
        }
        .into()
    }

    /// Builds the DOT source for an edge set
    pub fn dot_source(edges: &EdgeSet) -> String {
        let mut source = String::from("digraph G {\n");
        for node in edges.nodes() {
            source.push_str(&format!("  \"{}\";\n", Self::quote(node)));
        }
        for (parent, child) in edges.edges() {
            source.push_str(&format!(
                "  \"{}\" -> \"{}\";\n",
                Self::quote(parent),
                Self::quote(child)
            ));
        }
        source.push_str("}\n");
        source
    }

    fn quote(id: &str) -> String {
        id.replace('\\', "\\\\").replace('"', "\\\"")
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageRenderer for GraphvizRenderer {
    #[instrument(skip(self), fields(program = %self.program))]
    fn ensure_available(&self) -> Result<()> {
        let output = Command::new(&self.program)
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|_| self.missing_program())?;

        if output.status.success() {
            // dot prints its version banner on stderr
            let version = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(version = %version, "Graphviz found");
            Ok(())
        } else {
            Err(self.missing_program())
        }
    }

    #[instrument(skip(self, edges), fields(output = %output_path.display(), format = %format))]
    fn render(&self, edges: &EdgeSet, format: ImageFormat, output_path: &Path) -> Result<()> {
        let render_error = |details: String| -> anyhow::Error {
            HierarchyError::ImageRenderError {
                path: output_path.to_path_buf(),
                details,
            }
            .into()
        };

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format.as_str()))
            .arg("-o")
            .arg(output_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|_| self.missing_program())?;

        let source = Self::dot_source(edges);
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(source.as_bytes())
                .map_err(|e| render_error(e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| render_error(e.to_string()))?;
        if !output.status.success() {
            return Err(render_error(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        debug!(edges = edges.edges().len(), "Image rendered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::domain::ProjectGraph;
    use crate::hierarchy::renderers::render_edge_set;
    use std::path::PathBuf;

    #[test]
    fn test_dot_source_lists_nodes_and_edges() {
        let mut graph = ProjectGraph::default();
        let app = graph.get_or_create("App.csproj");
        graph.add_sub_project_reference(
            app,
            Path::new("src/App"),
            &crate::hierarchy::domain::ProjectReference::new("..\\Core", "Core.csproj"),
        );
        let source = GraphvizRenderer::dot_source(&render_edge_set(&graph, app));

        assert_eq!(
            source,
            "digraph G {\n  \"App.csproj\";\n  \"Core.csproj\";\n  \"App.csproj\" -> \"Core.csproj\";\n}\n"
        );
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(GraphvizRenderer::quote("a\"b\\c"), "a\\\"b\\\\c");
    }

    #[test]
    fn test_missing_program_is_reported() {
        let renderer = GraphvizRenderer::with_program("definitely-not-a-real-dot-binary");
        let err = renderer.ensure_available().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HierarchyError>(),
            Some(HierarchyError::MissingGraphRenderer { .. })
        ));
    }

    #[test]
    fn test_render_with_missing_program_fails() {
        let renderer = GraphvizRenderer::with_program("definitely-not-a-real-dot-binary");
        let result = renderer.render(
            &EdgeSet::default(),
            ImageFormat::PNG,
            &PathBuf::from("out.png"),
        );
        assert!(result.is_err());
    }
}
