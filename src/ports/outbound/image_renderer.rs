use crate::application::dto::ImageFormat;
use crate::hierarchy::renderers::EdgeSet;
use crate::shared::Result;
use std::path::Path;

/// ImageRenderer port for the external graph layout engine
///
/// Layout and rasterization happen outside this crate; the port receives
/// the node and edge lists and produces an image file.
pub trait ImageRenderer {
    /// Verifies that the rendering engine is installed
    ///
    /// # Errors
    /// Returns an error with installation guidance if it is not
    fn ensure_available(&self) -> Result<()>;

    /// Lays out `edges` and writes the image to `output_path`
    fn render(&self, edges: &EdgeSet, format: ImageFormat, output_path: &Path) -> Result<()>;
}
