use crate::ports::outbound::DescriptorScanner;
use crate::shared::error::HierarchyError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};
use walkdir::WalkDir;

/// WalkDirScanner adapter for recursive file discovery
///
/// Entries are visited in file-name order so repeated runs see descriptors
/// in the same order. Symbolic links are not followed.
pub struct WalkDirScanner;

impl WalkDirScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WalkDirScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl DescriptorScanner for WalkDirScanner {
    #[instrument(skip(self), fields(root = %root.display()))]
    fn find_files(&self, root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| HierarchyError::ScanError {
                path: e.path().unwrap_or(root).to_path_buf(),
                details: e.to_string(),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().ends_with(suffix) {
                trace!(file = %entry.path().display(), "Found matching file");
                files.push(entry.into_path());
            }
        }

        debug!(suffix, file_count = files.len(), "Directory scan completed");
        Ok(files)
    }

    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn layout() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("src/Web")).unwrap();
        fs::create_dir_all(root.join("src/Core")).unwrap();
        fs::write(root.join("Shop.sln"), "").unwrap();
        fs::write(root.join("src/Web/Web.csproj"), "").unwrap();
        fs::write(root.join("src/Core/Core.csproj"), "").unwrap();
        fs::write(root.join("src/Core/Core.csproj.user"), "").unwrap();
        fs::write(root.join("src/Core/Class1.cs"), "").unwrap();
        temp_dir
    }

    #[test]
    fn test_finds_files_by_suffix_in_name_order() {
        let temp_dir = layout();
        let files = WalkDirScanner::new()
            .find_files(temp_dir.path(), ".csproj")
            .unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Core.csproj", "Web.csproj"]);
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let temp_dir = layout();
        fs::write(temp_dir.path().join("Upper.CSPROJ"), "").unwrap();
        let files = WalkDirScanner::new()
            .find_files(temp_dir.path(), ".csproj")
            .unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_directories_are_not_returned() {
        let temp_dir = layout();
        fs::create_dir_all(temp_dir.path().join("odd.sln")).unwrap();
        let files = WalkDirScanner::new()
            .find_files(temp_dir.path(), ".sln")
            .unwrap();
        assert_eq!(files, vec![temp_dir.path().join("Shop.sln")]);
    }

    #[test]
    fn test_directory_exists() {
        let temp_dir = layout();
        let scanner = WalkDirScanner::new();
        assert!(scanner.directory_exists(&temp_dir.path().join("src/Web")));
        assert!(!scanner.directory_exists(&temp_dir.path().join("src/Api")));
        assert!(!scanner.directory_exists(&temp_dir.path().join("Shop.sln")));
    }

    #[test]
    fn test_missing_root_is_scan_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = WalkDirScanner::new()
            .find_files(&temp_dir.path().join("absent"), ".sln")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HierarchyError>(),
            Some(HierarchyError::ScanError { .. })
        ));
    }
}
