/// Graphviz adapter for rendering hierarchy images
mod dot_renderer;

pub use dot_renderer::GraphvizRenderer;
