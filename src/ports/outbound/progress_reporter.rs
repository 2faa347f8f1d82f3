/// ProgressReporter port for user-facing status messages
///
/// Implementations must keep these messages off stdout, which may carry
/// the Prism document itself.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

/// Lets one reporter be lent to a use case and still be used by its owner
impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message);
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message);
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message);
    }
}
