use crate::shared::Result;
use std::path::Path;

/// DescriptorReader port for reading descriptor file contents
pub trait DescriptorReader {
    /// Reads a solution or project descriptor as text
    ///
    /// # Errors
    /// Returns an error if the file is missing, not a regular file,
    /// or cannot be read
    fn read_descriptor(&self, path: &Path) -> Result<String>;
}
