use project_hierarchy::prelude::*;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// In-memory file tree shared by the mock scanner and reader
#[derive(Default, Clone)]
pub struct MockDescriptorScanner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MockDescriptorScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file and every ancestor directory
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        let path = PathBuf::from(path);
        for ancestor in path.ancestors().skip(1) {
            self.directories.insert(ancestor.to_path_buf());
        }
        self.files.insert(path, content.to_string());
        self
    }

    /// Reader over the same files
    pub fn reader(&self) -> MockDescriptorReader {
        MockDescriptorReader {
            files: self.files.clone(),
        }
    }
}

impl DescriptorScanner for MockDescriptorScanner {
    fn find_files(&self, root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .keys()
            .filter(|path| path.starts_with(root))
            .filter(|path| path.to_string_lossy().ends_with(suffix))
            .cloned()
            .collect())
    }

    fn directory_exists(&self, path: &Path) -> bool {
        self.directories.contains(path)
    }
}

/// Mock DescriptorReader for testing
#[derive(Default, Clone)]
pub struct MockDescriptorReader {
    files: BTreeMap<PathBuf, String>,
}

impl DescriptorReader for MockDescriptorReader {
    fn read_descriptor(&self, path: &Path) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            HierarchyError::DescriptorReadError {
                path: path.to_path_buf(),
                details: "No such file".to_string(),
            }
            .into()
        })
    }
}
