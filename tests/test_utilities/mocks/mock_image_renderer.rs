use project_hierarchy::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ImageRenderer for testing that records render calls
#[derive(Clone)]
pub struct MockImageRenderer {
    available: bool,
    pub rendered: Arc<Mutex<Vec<(PathBuf, ImageFormat, EdgeSet)>>>,
}

impl MockImageRenderer {
    pub fn new() -> Self {
        Self {
            available: true,
            rendered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn render_count(&self) -> usize {
        self.rendered.lock().unwrap().len()
    }
}

impl ImageRenderer for MockImageRenderer {
    fn ensure_available(&self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(HierarchyError::MissingGraphRenderer {
                program: "dot".to_string(),
                hint: "Install Graphviz".to_string(),
            }
            .into())
        }
    }

    fn render(&self, edges: &EdgeSet, format: ImageFormat, output_path: &Path) -> Result<()> {
        self.rendered
            .lock()
            .unwrap()
            .push((output_path.to_path_buf(), format, edges.clone()));
        Ok(())
    }
}
