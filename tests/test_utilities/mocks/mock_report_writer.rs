use project_hierarchy::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ReportWriter for testing that captures written reports
#[derive(Default, Clone)]
pub struct MockReportWriter {
    pub reports: Arc<Mutex<Vec<(PathBuf, String)>>>,
    fail_on: Option<PathBuf>,
}

impl MockReportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails writes to `path`
    pub fn failing_on(path: &str) -> Self {
        Self {
            fail_on: Some(PathBuf::from(path)),
            ..Self::default()
        }
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }

    pub fn content_of(&self, path: &str) -> Option<String> {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .find(|(written, _)| written == Path::new(path))
            .map(|(_, content)| content.clone())
    }
}

impl ReportWriter for MockReportWriter {
    fn write_report(&self, path: &Path, content: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(path) {
            return Err(HierarchyError::ReportWriteError {
                path: path.to_path_buf(),
                details: "Permission denied".to_string(),
            }
            .into());
        }
        self.reports
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
