/// ProgressReporter port for reporting progress during report assembly
///
/// This port abstracts progress reporting (e.g., to stderr) to provide
/// user feedback during long-running catalog fetches, and carries the
/// warnings produced when individual components or attributes are
/// skipped.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress against a known total
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
