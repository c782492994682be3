use crate::shared::Result;

/// OutputPresenter port for presenting console output
///
/// Used for output that is not a report file, such as the directory tree listing.
pub trait OutputPresenter {
    /// Presents the content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
