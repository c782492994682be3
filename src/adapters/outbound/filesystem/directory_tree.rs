use crate::shared::error::HierarchyError;
use crate::shared::Result;
use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Directory names whose subtrees are left out of the listing
pub const EXCLUDED_DIRECTORIES: [&str; 7] =
    ["bin", "obj", "node_modules", "dist", "packages", ".git", ".vs"];

/// Spaces added per nesting level
const INDENT_WIDTH: usize = 4;

/// DirectoryTreeLister adapter producing an indented directory listing
pub struct DirectoryTreeLister {
    include_filenames: bool,
}

impl DirectoryTreeLister {
    pub fn new(include_filenames: bool) -> Self {
        Self { include_filenames }
    }

    /// Lists `root` and its subdirectories, one `name/` line each.
    ///
    /// Files of a directory follow its line, before its subdirectories,
    /// when file names are included.
    pub fn render(&self, root: &Path) -> Result<String> {
        let mut output = String::new();
        let walker = WalkDir::new(root)
            .sort_by(Self::files_first)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !Self::is_excluded(entry));

        for entry in walker {
            let entry = entry.map_err(|e| HierarchyError::ScanError {
                path: e.path().unwrap_or(root).to_path_buf(),
                details: e.to_string(),
            })?;
            let indentation = " ".repeat(entry.depth() * INDENT_WIDTH);

            if entry.file_type().is_dir() {
                output.push_str(&format!("{}{}/\n", indentation, Self::entry_name(&entry)));
            } else if self.include_filenames {
                output.push_str(&format!("{}{}\n", indentation, Self::entry_name(&entry)));
            }
        }
        Ok(output)
    }

    fn is_excluded(entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && EXCLUDED_DIRECTORIES
                .iter()
                .any(|excluded| entry.file_name() == *excluded)
    }

    fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
        (a.file_type().is_dir(), a.file_name()).cmp(&(b.file_type().is_dir(), b.file_name()))
    }

    fn entry_name(entry: &DirEntry) -> String {
        match entry.path().file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => entry.path().display().to_string(),
        }
    }
}
