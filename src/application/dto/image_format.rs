use crate::shared::error::HierarchyError;

/// Output formats accepted by the Graphviz `dot` renderer
pub const SUPPORTED_IMAGE_FORMATS: &[&str] = &[
    "canon", "cmap", "cmapx", "cmapx_np", "dia", "dot", "fig", "gd", "gd2", "gif", "hpgl",
    "imap", "imap_np", "ismap", "jpe", "jpeg", "jpg", "mif", "mp", "pcl", "pdf", "pic", "plain",
    "plain-ext", "png", "ps", "ps2", "svg", "svgz", "vml", "vmlz", "vrml", "vtx", "wbmp", "xdot",
    "xlib",
];

/// Image output format, restricted to [`SUPPORTED_IMAGE_FORMATS`]
///
/// This type belongs in the application layer as both the CLI (inbound)
/// and the image renderer (outbound) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageFormat(&'static str);

impl ImageFormat {
    pub const PNG: ImageFormat = ImageFormat("png");

    /// Format code passed to the renderer and used as file extension
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for ImageFormat {
    fn default() -> Self {
        Self::PNG
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = HierarchyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let requested = s.trim().to_lowercase();
        SUPPORTED_IMAGE_FORMATS
            .iter()
            .find(|format| **format == requested)
            .map(|format| ImageFormat(*format))
            .ok_or_else(|| HierarchyError::UnsupportedImageFormat {
                format: s.to_string(),
                valid: SUPPORTED_IMAGE_FORMATS.join(", "),
            })
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
