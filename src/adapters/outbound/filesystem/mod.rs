/// Filesystem adapters for file discovery and file I/O operations
mod directory_tree;
mod file_reader;
mod file_writer;
mod walkdir_scanner;

pub use directory_tree::{DirectoryTreeLister, EXCLUDED_DIRECTORIES};
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use walkdir_scanner::WalkDirScanner;
