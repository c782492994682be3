use crate::ports::outbound::DescriptorReader;
use crate::shared::error::HierarchyError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum descriptor size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// UTF-8 byte order mark written by Visual Studio
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// FileSystemReader adapter for reading descriptor files from the file system
///
/// This adapter implements the DescriptorReader port. Invalid UTF-8 is
/// replaced rather than rejected and a leading byte order mark is dropped.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file metadata: {}", e))?;

        // Security check: Reject symbolic links
        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        // Security check: File size limit (prevent DoS via huge files)
        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        let bytes = fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))?;
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

impl DescriptorReader for FileSystemReader {
    fn read_descriptor(&self, path: &Path) -> Result<String> {
        self.safe_read_file(path).map_err(|e| {
            HierarchyError::DescriptorReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
