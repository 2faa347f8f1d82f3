use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (the Prism file or stdout)
/// where the formatted report is delivered.
pub trait OutputPresenter {
    /// Presents the formatted Prism content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is not allowed (symbolic link, missing directory)
    fn present(&self, content: &str) -> Result<()>;
}
