use crate::shared::Result;
use std::path::{Path, PathBuf};

/// DescriptorScanner port for discovering files below a directory
///
/// This port abstracts the recursive directory walk used to find solution,
/// project and source files.
pub trait DescriptorScanner {
    /// Finds every file under `root` whose name ends with `suffix`
    ///
    /// # Arguments
    /// * `root` - Directory to walk recursively
    /// * `suffix` - Case-sensitive file name suffix (e.g. `.csproj`)
    ///
    /// # Returns
    /// Matching file paths in a deterministic order
    ///
    /// # Errors
    /// Returns an error if any directory below `root` cannot be read
    fn find_files(&self, root: &Path, suffix: &str) -> Result<Vec<PathBuf>>;

    /// Whether `path` names an existing directory
    fn directory_exists(&self, path: &Path) -> bool;
}
